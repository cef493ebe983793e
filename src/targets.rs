//! Targets

use std::fmt;

use smallvec::SmallVec;

/// A validated item goal for the end of the event window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target(u64);

impl Target {
    /// Number of items to reach.
    pub fn items(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The enumerated set of goals a caller may ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedTargets {
    values: SmallVec<[u64; 4]>,
}

impl SupportedTargets {
    /// Creates a target set; values are sorted and deduplicated.
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        let mut values: SmallVec<[u64; 4]> = values.into_iter().collect();

        values.sort_unstable();
        values.dedup();

        Self { values }
    }

    /// Targets offered for the built-in event.
    pub fn reference() -> Self {
        Self::new([270, 450])
    }

    /// Validates a raw value from the caller.
    ///
    /// Returns `None` when the value is not one of the supported targets.
    pub fn target(&self, raw: i64) -> Option<Target> {
        let value = u64::try_from(raw).ok()?;

        self.values.contains(&value).then_some(Target(value))
    }

    /// Supported values in ascending order.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Returns true if no target is supported.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for SupportedTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.values.iter().map(u64::to_string).collect();

        write!(f, "{}", values.join(", "))
    }
}
