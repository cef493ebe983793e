//! Ladder prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{BundleTier, Catalog, CatalogError, DayOption, MandatoryItem, UnlimitedBundle},
    fixtures::{FixtureError, load_simulator, parse_simulator},
    plan::{DayPlan, Plan, Purchase, TopUp},
    report::Report,
    search::{ExhaustiveSolver, SearchError, Solver},
    simulator::{PlanError, Simulator, compute_optimal_plan},
    targets::{SupportedTargets, Target},
};
