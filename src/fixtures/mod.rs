//! Fixtures
//!
//! Event catalogs described in YAML, so another event can be planned without rebuilding.

use std::{fs, path::Path};

use thiserror::Error;

use crate::{catalog::CatalogError, simulator::Simulator};

pub mod catalog;

pub use catalog::{CatalogFixture, parse_price};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A price uses a different currency from the rest of the catalog
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// The fixture does not list any targets
    #[error("Fixture does not list any supported targets")]
    NoTargets,

    /// The described catalog is invalid
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load a simulator from a YAML fixture file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or describes an invalid catalog.
pub fn load_simulator(path: impl AsRef<Path>) -> Result<Simulator, FixtureError> {
    let contents = fs::read_to_string(path.as_ref())?;

    parse_simulator(&contents)
}

/// Parse a simulator from YAML
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed or describes an invalid catalog.
pub fn parse_simulator(yaml: &str) -> Result<Simulator, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    fixture.try_into()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use super::*;

    const SMALL: &str = r#"
days: 2
targets: [30, 10]
mandatory:
  - { name: Pass, items: 10, price: "100 JPY" }
daily_tiers:
  - { label: Pack x5, items: 5, price: "50 JPY" }
unlimited:
  label: Big pack
  items: 20
  price: "600 JPY"
"#;

    #[test]
    fn parses_small_catalog() -> TestResult {
        let simulator = parse_simulator(SMALL)?;

        assert_eq!(simulator.catalog().days(), 2);
        assert_eq!(simulator.catalog().day_options().len(), 2);
        assert_eq!(simulator.targets().values(), &[10, 30]);

        Ok(())
    }

    #[test]
    fn loads_from_file() -> TestResult {
        let mut file = NamedTempFile::new()?;
        file.write_all(SMALL.as_bytes())?;

        let simulator = load_simulator(file.path())?;

        assert_eq!(simulator.catalog().base_cost(), 100);

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_simulator("does/not/exist.yml");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let result = parse_simulator("days: [");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn invalid_catalog_is_reported() {
        let yaml = SMALL.replace("days: 2", "days: 0");

        assert!(matches!(
            parse_simulator(&yaml),
            Err(FixtureError::Catalog(CatalogError::NoDays))
        ));
    }

    #[test]
    fn unpriceable_target_is_reported_as_error() -> TestResult {
        let yaml = SMALL
            .replace("targets: [30, 10]", "targets: [9000000000000000000]")
            .replace("items: 20\n  price: \"600 JPY\"", "items: 1\n  price: \"3 JPY\"");

        let simulator = parse_simulator(&yaml)?;

        assert!(matches!(
            simulator.plan(9_000_000_000_000_000_000),
            Err(crate::simulator::PlanError::Search(
                crate::search::SearchError::NoFeasiblePlan { .. }
            ))
        ));
        assert!(simulator.plan_text(9_000_000_000_000_000_000).starts_with("Error: "));

        Ok(())
    }
}
