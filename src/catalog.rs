//! Catalog
//!
//! Constant purchase data for one event: the mandatory purchases everybody makes, the limited
//! pack ladder that can be climbed once per day, and the unlimited pack used to close any gap.

use rusty_money::iso::{self, Currency};
use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised when building a catalog from parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The event window has no days.
    #[error("event window must contain at least one day")]
    NoDays,

    /// A tier in the daily ladder grants no items.
    #[error("daily tier {index} ({label}) must grant at least one item")]
    EmptyTier {
        /// Zero-based position of the tier in the ladder
        index: usize,
        /// Tier label
        label: String,
    },

    /// The unlimited bundle grants no items, so it could never close a shortfall.
    #[error("unlimited bundle ({0}) must grant at least one item")]
    EmptyUnlimitedBundle(String),

    /// Item or cost totals do not fit in 64 bits.
    #[error("{0} totals overflow")]
    TotalsOverflow(&'static str),
}

/// A purchase made once over the whole event regardless of the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryItem {
    /// Display name
    pub name: String,

    /// Items granted
    pub items: u64,

    /// Cost in minor units
    pub cost: u64,
}

impl MandatoryItem {
    /// Creates a new mandatory item.
    pub fn new(name: impl Into<String>, items: u64, cost: u64) -> Self {
        Self {
            name: name.into(),
            items,
            cost,
        }
    }
}

/// One rung of the limited per-day pack ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleTier {
    /// Items granted by this rung alone
    pub items: u64,

    /// Cost of this rung alone, in minor units
    pub cost: u64,

    /// Display label
    pub label: String,
}

impl BundleTier {
    /// Creates a new tier.
    pub fn new(label: impl Into<String>, items: u64, cost: u64) -> Self {
        Self {
            items,
            cost,
            label: label.into(),
        }
    }
}

/// A choice for a single day: climb the ladder up to and including some rung.
///
/// Totals are cumulative over every rung bought, not just the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOption {
    /// Total items granted by every rung in `tiers`
    pub items: u64,

    /// Total cost of every rung in `tiers`, in minor units
    pub cost: u64,

    /// Rungs bought, in ladder order
    pub tiers: SmallVec<[BundleTier; 4]>,
}

impl DayOption {
    /// The "buy nothing today" option.
    pub fn none() -> Self {
        Self {
            items: 0,
            cost: 0,
            tiers: SmallVec::new(),
        }
    }

    /// Returns true if nothing is bought with this option.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

/// A repeatable pack with no purchase limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlimitedBundle {
    /// Items granted per pack
    pub items: u64,

    /// Cost per pack, in minor units
    pub cost: u64,

    /// Display label
    pub label: String,
}

impl UnlimitedBundle {
    /// Creates a new unlimited bundle.
    pub fn new(label: impl Into<String>, items: u64, cost: u64) -> Self {
        Self {
            items,
            cost,
            label: label.into(),
        }
    }
}

/// Immutable purchase data for an event window.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    days: usize,
    mandatory: Vec<MandatoryItem>,
    day_options: Vec<DayOption>,
    unlimited: UnlimitedBundle,
    currency: &'static Currency,
}

impl Catalog {
    /// Builds a catalog, deriving the cumulative day options from the tier ladder.
    ///
    /// Day option `0` buys nothing, option `m` buys the first `m` rungs of `daily_tiers`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NoDays`]: `days` is zero.
    /// - [`CatalogError::EmptyTier`]: a rung grants no items.
    /// - [`CatalogError::EmptyUnlimitedBundle`]: the unlimited bundle grants no items.
    /// - [`CatalogError::TotalsOverflow`]: the mandatory or ladder totals overflow.
    pub fn new(
        days: usize,
        mandatory: Vec<MandatoryItem>,
        daily_tiers: &[BundleTier],
        unlimited: UnlimitedBundle,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        if days == 0 {
            return Err(CatalogError::NoDays);
        }

        if let Some((index, tier)) = daily_tiers
            .iter()
            .enumerate()
            .find(|(_, tier)| tier.items == 0)
        {
            return Err(CatalogError::EmptyTier {
                index,
                label: tier.label.clone(),
            });
        }

        if unlimited.items == 0 {
            return Err(CatalogError::EmptyUnlimitedBundle(unlimited.label));
        }

        if checked_totals(mandatory.iter().map(|item| (item.items, item.cost))).is_none() {
            return Err(CatalogError::TotalsOverflow("mandatory purchase"));
        }

        if checked_totals(daily_tiers.iter().map(|tier| (tier.items, tier.cost))).is_none() {
            return Err(CatalogError::TotalsOverflow("daily ladder"));
        }

        Ok(Self::build(days, mandatory, daily_tiers, unlimited, currency))
    }

    fn build(
        days: usize,
        mandatory: Vec<MandatoryItem>,
        daily_tiers: &[BundleTier],
        unlimited: UnlimitedBundle,
        currency: &'static Currency,
    ) -> Self {
        Self {
            days,
            mandatory,
            day_options: ladder_options(daily_tiers),
            unlimited,
            currency,
        }
    }

    /// The built-in three day event.
    pub fn reference() -> Self {
        let mandatory = vec![
            MandatoryItem::new("Pass I", 14, 1340),
            MandatoryItem::new("Pass II", 30, 2780),
            MandatoryItem::new("Diamond exchange", 30, 0),
            MandatoryItem::new("Daily rewards", 4, 0),
        ];

        let tiers = [
            BundleTier::new("Limited pack x2", 2, 132),
            BundleTier::new("Limited pack x6", 6, 670),
            BundleTier::new("Limited pack x10", 10, 1340),
            BundleTier::new("Limited pack x20", 20, 2780),
        ];

        let unlimited = UnlimitedBundle::new("Unlimited 45-item pack", 45, 6780);

        Self::build(3, mandatory, &tiers, unlimited, iso::JPY)
    }

    /// Number of days in the event window.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Mandatory purchases in display order.
    pub fn mandatory(&self) -> &[MandatoryItem] {
        &self.mandatory
    }

    /// Total items granted by the mandatory purchases.
    pub fn base_items(&self) -> u64 {
        self.mandatory
            .iter()
            .map(|item| item.items)
            .fold(0, u64::saturating_add)
    }

    /// Total cost of the mandatory purchases, in minor units.
    pub fn base_cost(&self) -> u64 {
        self.mandatory
            .iter()
            .map(|item| item.cost)
            .fold(0, u64::saturating_add)
    }

    /// Choices available on every day, "no purchase" first.
    pub fn day_options(&self) -> &[DayOption] {
        &self.day_options
    }

    /// The top-up pack.
    pub fn unlimited(&self) -> &UnlimitedBundle {
        &self.unlimited
    }

    /// Currency all costs are expressed in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Item and cost sums, or `None` if either overflows.
fn checked_totals(pairs: impl IntoIterator<Item = (u64, u64)>) -> Option<(u64, u64)> {
    pairs.into_iter().try_fold((0u64, 0u64), |(items, cost), (more_items, more_cost)| {
        Some((items.checked_add(more_items)?, cost.checked_add(more_cost)?))
    })
}

/// Running totals over each prefix of the ladder, starting with the empty prefix.
fn ladder_options(tiers: &[BundleTier]) -> Vec<DayOption> {
    let mut options = Vec::with_capacity(tiers.len() + 1);
    let mut current = DayOption::none();

    options.push(current.clone());

    for tier in tiers {
        current.items = current.items.saturating_add(tier.items);
        current.cost = current.cost.saturating_add(tier.cost);
        current.tiers.push(tier.clone());

        options.push(current.clone());
    }

    options
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn reference_mandatory_totals() {
        let catalog = Catalog::reference();

        assert_eq!(catalog.days(), 3);
        assert_eq!(catalog.base_items(), 78);
        assert_eq!(catalog.base_cost(), 4120);
    }

    #[test]
    fn reference_day_options_are_cumulative() {
        let catalog = Catalog::reference();

        let totals: Vec<(u64, u64, usize)> = catalog
            .day_options()
            .iter()
            .map(|option| (option.items, option.cost, option.tiers.len()))
            .collect();

        assert_eq!(
            totals,
            vec![
                (0, 0, 0),
                (2, 132, 1),
                (8, 802, 2),
                (18, 2142, 3),
                (38, 4922, 4)
            ]
        );
    }

    #[test]
    fn first_day_option_buys_nothing() {
        let catalog = Catalog::reference();

        assert!(catalog.day_options().first().is_some_and(DayOption::is_empty));
    }

    #[test]
    fn reference_unlimited_bundle() {
        let catalog = Catalog::reference();

        assert_eq!(catalog.unlimited().items, 45);
        assert_eq!(catalog.unlimited().cost, 6780);
        assert_eq!(catalog.currency(), iso::JPY);
    }

    #[test]
    fn new_without_tiers_only_offers_no_purchase() -> TestResult {
        let catalog = Catalog::new(
            2,
            vec![MandatoryItem::new("Pass", 10, 500)],
            &[],
            UnlimitedBundle::new("Pack", 5, 100),
            iso::JPY,
        )?;

        assert_eq!(catalog.day_options(), &[DayOption::none()]);

        Ok(())
    }

    #[test]
    fn new_rejects_zero_days() {
        let result = Catalog::new(
            0,
            Vec::new(),
            &[],
            UnlimitedBundle::new("Pack", 5, 100),
            iso::JPY,
        );

        assert_eq!(result, Err(CatalogError::NoDays));
    }

    #[test]
    fn new_rejects_empty_tier() {
        let result = Catalog::new(
            1,
            Vec::new(),
            &[BundleTier::new("Two", 2, 10), BundleTier::new("Nothing", 0, 10)],
            UnlimitedBundle::new("Pack", 5, 100),
            iso::JPY,
        );

        assert_eq!(
            result,
            Err(CatalogError::EmptyTier {
                index: 1,
                label: "Nothing".to_string(),
            })
        );
    }

    #[test]
    fn new_rejects_empty_unlimited_bundle() {
        let result = Catalog::new(
            1,
            Vec::new(),
            &[],
            UnlimitedBundle::new("Empty pack", 0, 100),
            iso::JPY,
        );

        assert_eq!(
            result,
            Err(CatalogError::EmptyUnlimitedBundle("Empty pack".to_string()))
        );
    }

    #[test]
    fn new_rejects_overflowing_mandatory_totals() {
        let result = Catalog::new(
            1,
            vec![
                MandatoryItem::new("Pass", 10, u64::MAX),
                MandatoryItem::new("Pass II", 10, 1),
            ],
            &[],
            UnlimitedBundle::new("Pack", 5, 100),
            iso::JPY,
        );

        assert_eq!(result, Err(CatalogError::TotalsOverflow("mandatory purchase")));
    }

    #[test]
    fn new_rejects_overflowing_ladder_totals() {
        let result = Catalog::new(
            1,
            Vec::new(),
            &[BundleTier::new("Huge", u64::MAX, 10), BundleTier::new("One", 1, 10)],
            UnlimitedBundle::new("Pack", 5, 100),
            iso::JPY,
        );

        assert_eq!(result, Err(CatalogError::TotalsOverflow("daily ladder")));
    }
}
