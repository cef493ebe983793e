//! Ladder
//!
//! Ladder finds the cheapest way to collect a target number of event items over a multi-day
//! event, given mandatory purchases, a limited pack ladder that resets every day, and an
//! unlimited pack for topping up.

pub mod catalog;
pub mod fixtures;
pub mod plan;
pub mod prelude;
pub mod pricing;
pub mod report;
pub mod search;
pub mod simulator;
pub mod targets;

pub use simulator::{PlanError, Simulator, compute_optimal_plan};
