//! Plan search
//!
//! Every day offers the same cumulative ladder of limited packs, and the unlimited pack fills
//! whatever is still missing on the last day. Buying the best value rung each day is not
//! guaranteed to be cheapest once the top-up rounds up to whole packs, and the cost per item of
//! the ladder's rungs need not be monotonic, so the search tries every combination of day
//! options instead. With `N` options and `D` days that is `N^D` combinations of `O(D)` work each:
//! 125 for the built-in event.

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    catalog::Catalog,
    plan::{DayPlan, Plan, Purchase, TopUp},
    targets::Target,
};

pub mod combinations;

use combinations::{Choices, Combinations};

/// Search errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// No combination of purchases reached the target.
    #[error("no optimal purchase plan was found for a target of {target} items; the target may be too high")]
    NoFeasiblePlan {
        /// Requested target
        target: u64,
    },
}

/// Trait for finding the cheapest plan for a target
pub trait Solver {
    /// Find the cheapest plan reaching `target` with the purchases in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if no plan reaches the target.
    fn solve(catalog: &Catalog, target: Target) -> Result<Plan, SearchError>;
}

/// Brute force over every combination of day options, with a greedy top-up per combination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl Solver for ExhaustiveSolver {
    #[instrument(level = "debug", skip_all, fields(requested = target.items()))]
    fn solve(catalog: &Catalog, target: Target) -> Result<Plan, SearchError> {
        let base_items = catalog.base_items();
        let base_cost = catalog.base_cost();

        if base_items >= target.items() {
            debug!(base_items, "target reached by mandatory purchases alone");

            return Ok(Plan::mandatory_only(target, base_items, base_cost));
        }

        let mut best: Option<Candidate> = None;
        let mut evaluated = 0usize;

        for choices in Combinations::new(catalog.days(), catalog.day_options().len()) {
            evaluated += 1;

            let Some(candidate) = Candidate::evaluate(catalog, target, choices) else {
                continue;
            };

            // Strictly cheaper only, so the first combination found at a given cost wins.
            if candidate.items >= target.items()
                && best.as_ref().is_none_or(|best| candidate.cost < best.cost)
            {
                debug!(
                    choices = ?candidate.choices.as_slice(),
                    cost = candidate.cost,
                    items = candidate.items,
                    "new cheapest combination"
                );

                best = Some(candidate);
            }
        }

        debug!(evaluated, "search finished");

        let best = best.ok_or(SearchError::NoFeasiblePlan {
            target: target.items(),
        })?;

        Ok(best.into_plan(catalog, target, base_items, base_cost))
    }
}

/// One evaluated combination of day options plus its top-up.
#[derive(Debug, Clone)]
struct Candidate {
    choices: Choices,
    top_up: Option<TopUp>,
    items: u64,
    cost: u64,
}

impl Candidate {
    /// Totals for a combination, including the unlimited packs needed to reach the target.
    ///
    /// Returns `None` if a choice is not a valid option index, or if the totals overflow and the
    /// combination cannot be priced.
    fn evaluate(catalog: &Catalog, target: Target, choices: Choices) -> Option<Self> {
        let mut items = catalog.base_items();
        let mut cost = catalog.base_cost();

        for &choice in &choices {
            let option = catalog.day_options().get(choice)?;

            items = items.checked_add(option.items)?;
            cost = cost.checked_add(option.cost)?;
        }

        let shortfall = target.items().saturating_sub(items);

        let top_up = if shortfall == 0 {
            None
        } else {
            Some(TopUp::for_shortfall(shortfall, catalog.unlimited())?)
        };

        if let Some(top_up) = top_up {
            items = items.checked_add(top_up.items)?;
            cost = cost.checked_add(top_up.cost)?;
        }

        Some(Self {
            choices,
            top_up,
            items,
            cost,
        })
    }

    /// Expands the chosen option indices into per-day purchases.
    ///
    /// The top-up is always bought on the last day, after that day's limited packs.
    fn into_plan(self, catalog: &Catalog, target: Target, base_items: u64, base_cost: u64) -> Plan {
        let last_day = self.choices.len();

        let days = self
            .choices
            .iter()
            .enumerate()
            .map(|(idx, &option)| {
                let day = idx + 1;

                let mut purchases: SmallVec<[Purchase; 5]> = catalog
                    .day_options()
                    .get(option)
                    .map(|option| option.tiers.iter().cloned().map(Purchase::Tier).collect())
                    .unwrap_or_default();

                if day == last_day {
                    if let Some(top_up) = self.top_up {
                        purchases.push(Purchase::TopUp {
                            label: catalog.unlimited().label.clone(),
                            top_up,
                        });
                    }
                }

                DayPlan {
                    day,
                    option,
                    purchases,
                }
            })
            .collect();

        Plan::new(target, base_items, base_cost, days)
    }
}
