//! Plan

use smallvec::SmallVec;

use crate::{
    catalog::{BundleTier, UnlimitedBundle},
    targets::Target,
};

/// Repeated purchases of the unlimited bundle covering a shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopUp {
    /// Number of packs bought
    pub packs: u64,

    /// Items granted by all packs
    pub items: u64,

    /// Cost of all packs, in minor units
    pub cost: u64,
}

impl TopUp {
    /// The fewest whole packs of `bundle` that cover `shortfall` items.
    ///
    /// Returns `None` when there is nothing to cover, the bundle grants no items, or the packs'
    /// totals overflow.
    pub fn for_shortfall(shortfall: u64, bundle: &UnlimitedBundle) -> Option<Self> {
        if shortfall == 0 || bundle.items == 0 {
            return None;
        }

        let packs = shortfall.div_ceil(bundle.items);

        Some(Self {
            packs,
            items: packs.checked_mul(bundle.items)?,
            cost: packs.checked_mul(bundle.cost)?,
        })
    }
}

/// One line in a day's purchases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purchase {
    /// A rung of the limited daily ladder.
    Tier(BundleTier),

    /// Packs of the unlimited bundle.
    TopUp {
        /// Bundle label
        label: String,

        /// Packs bought and their totals
        top_up: TopUp,
    },
}

impl Purchase {
    /// Items granted by this purchase.
    pub fn items(&self) -> u64 {
        match self {
            Purchase::Tier(tier) => tier.items,
            Purchase::TopUp { top_up, .. } => top_up.items,
        }
    }

    /// Cost of this purchase, in minor units.
    pub fn cost(&self) -> u64 {
        match self {
            Purchase::Tier(tier) => tier.cost,
            Purchase::TopUp { top_up, .. } => top_up.cost,
        }
    }
}

/// Everything bought on one day of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    /// Day number, starting at 1
    pub day: usize,

    /// Index of the day option chosen for this day
    pub option: usize,

    /// Purchases in the order they are made
    pub purchases: SmallVec<[Purchase; 5]>,
}

impl DayPlan {
    /// Items bought on this day.
    pub fn items(&self) -> u64 {
        self.purchases
            .iter()
            .map(Purchase::items)
            .fold(0, u64::saturating_add)
    }

    /// Amount spent on this day, in minor units.
    pub fn cost(&self) -> u64 {
        self.purchases
            .iter()
            .map(Purchase::cost)
            .fold(0, u64::saturating_add)
    }

    /// Returns true if nothing is bought on this day.
    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }

    /// The unlimited packs bought on this day, if any.
    pub fn top_up(&self) -> Option<&TopUp> {
        self.purchases.iter().find_map(|purchase| match purchase {
            Purchase::TopUp { top_up, .. } => Some(top_up),
            Purchase::Tier(_) => None,
        })
    }
}

/// The cheapest way found to reach a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    target: Target,
    base_items: u64,
    base_cost: u64,
    days: Vec<DayPlan>,
}

impl Plan {
    /// Creates a plan that buys only the mandatory purchases.
    pub fn mandatory_only(target: Target, base_items: u64, base_cost: u64) -> Self {
        Self::new(target, base_items, base_cost, Vec::new())
    }

    /// Creates a plan with additional purchases per day.
    pub fn new(target: Target, base_items: u64, base_cost: u64, days: Vec<DayPlan>) -> Self {
        Self {
            target,
            base_items,
            base_cost,
            days,
        }
    }

    /// Target the plan reaches.
    pub fn target(&self) -> Target {
        self.target
    }

    /// Items granted by the mandatory purchases.
    pub fn base_items(&self) -> u64 {
        self.base_items
    }

    /// Cost of the mandatory purchases.
    pub fn base_cost(&self) -> u64 {
        self.base_cost
    }

    /// Additional purchases per day; empty when the mandatory purchases already reach the target.
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// Returns true if nothing beyond the mandatory purchases is bought.
    pub fn is_mandatory_only(&self) -> bool {
        self.days.is_empty()
    }

    /// Cost of everything bought beyond the mandatory purchases.
    pub fn additional_cost(&self) -> u64 {
        self.days.iter().map(DayPlan::cost).fold(0, u64::saturating_add)
    }

    /// Total items at the end of the window.
    pub fn total_items(&self) -> u64 {
        self.days
            .iter()
            .map(DayPlan::items)
            .fold(self.base_items, u64::saturating_add)
    }

    /// Total amount spent.
    pub fn total_cost(&self) -> u64 {
        self.base_cost.saturating_add(self.additional_cost())
    }

    /// Items left over beyond the target.
    pub fn excess_items(&self) -> u64 {
        self.total_items().saturating_sub(self.target.items())
    }
}
