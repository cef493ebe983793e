//! Simulator
//!
//! Entry point used by front ends: validates the requested target, runs the search and formats
//! the winning plan.

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    catalog::Catalog,
    plan::Plan,
    report::Report,
    search::{ExhaustiveSolver, SearchError, Solver},
    targets::SupportedTargets,
};

/// Errors returned to callers of the simulator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// The requested target is not one of the supported values.
    #[error("invalid target value \"{target}\" (supported targets: {supported})")]
    InvalidTarget {
        /// Value supplied by the caller
        target: i64,
        /// Supported values, comma separated
        supported: String,
    },

    /// Wrapped search error
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// A catalog paired with the targets callers may request.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulator {
    catalog: Catalog,
    targets: SupportedTargets,
}

impl Simulator {
    /// Creates a simulator for `catalog` accepting only `targets`.
    pub fn new(catalog: Catalog, targets: SupportedTargets) -> Self {
        Self { catalog, targets }
    }

    /// The built-in event and its targets.
    pub fn reference() -> Self {
        Self::new(Catalog::reference(), SupportedTargets::reference())
    }

    /// Purchase data.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Targets accepted by [`Simulator::plan`].
    pub fn targets(&self) -> &SupportedTargets {
        &self.targets
    }

    /// Finds the cheapest plan for a raw target value.
    ///
    /// # Errors
    ///
    /// - [`PlanError::InvalidTarget`]: `target` is not supported; no search is run.
    /// - [`PlanError::Search`]: no plan reaches the target.
    pub fn plan(&self, target: i64) -> Result<Plan, PlanError> {
        let Some(valid) = self.targets.target(target) else {
            warn!(requested = target, supported = %self.targets, "rejected unsupported target");

            return Err(PlanError::InvalidTarget {
                target,
                supported: self.targets.to_string(),
            });
        };

        let plan = ExhaustiveSolver::solve(&self.catalog, valid)?;

        info!(
            requested = target,
            total_cost = plan.total_cost(),
            total_items = plan.total_items(),
            "found cheapest plan"
        );

        Ok(plan)
    }

    /// Finds the cheapest plan and builds its breakdown.
    ///
    /// # Errors
    ///
    /// See [`Simulator::plan`].
    pub fn report(&self, target: i64) -> Result<Report, PlanError> {
        let plan = self.plan(target)?;

        Ok(Report::new(&self.catalog, &plan))
    }

    /// Finds the cheapest plan and renders it as text.
    ///
    /// # Errors
    ///
    /// See [`Simulator::plan`].
    pub fn compute_optimal_plan(&self, target: i64) -> Result<String, PlanError> {
        Ok(self.report(target)?.to_string())
    }

    /// Text to display for a raw target: the rendered plan, or a description of the error.
    pub fn plan_text(&self, target: i64) -> String {
        self.compute_optimal_plan(target)
            .unwrap_or_else(|err| format!("Error: {err}"))
    }
}

/// Finds the cheapest plan for `target` with the built-in event and renders it as text.
///
/// # Errors
///
/// See [`Simulator::plan`].
pub fn compute_optimal_plan(target: i64) -> Result<String, PlanError> {
    Simulator::reference().compute_optimal_plan(target)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn rejects_unsupported_target() {
        let result = compute_optimal_plan(300);

        assert_eq!(
            result,
            Err(PlanError::InvalidTarget {
                target: 300,
                supported: "270, 450".to_string(),
            })
        );
    }

    #[test]
    fn invalid_target_message_names_value() {
        let text = Simulator::reference().plan_text(-5);

        assert!(text.starts_with("Error: "));
        assert!(text.contains("\"-5\""), "got {text}");
    }

    #[test]
    fn supported_target_renders_plan() -> TestResult {
        let text = compute_optimal_plan(270)?;

        assert!(text.contains("--- Target: 270 items ---"));
        assert!(text.contains("Day 3 additional purchases"));

        Ok(())
    }

    #[test]
    fn plan_text_matches_rendered_plan() -> TestResult {
        let simulator = Simulator::reference();

        assert_eq!(simulator.plan_text(450), simulator.compute_optimal_plan(450)?);

        Ok(())
    }

    #[test]
    fn custom_targets_are_honoured() -> TestResult {
        let simulator = Simulator::new(Catalog::reference(), SupportedTargets::new([100]));

        assert!(simulator.plan(270).is_err());
        assert_eq!(simulator.plan(100)?.target().items(), 100);

        Ok(())
    }
}
