use std::fs;

use crate::errors::LoadError;

/// What to do with a store allocation whose dates are missing or whose
/// recognition period is inverted, when it appears inside a multi-store
/// journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum InvalidAllocationPolicy {
    /// Fail the whole journal, naming the offending store.
    #[default]
    Reject,
    /// Log a warning and leave the allocation out of the combined schedule.
    Skip,
}

/// Calculation settings, loadable from RON. Every field is optional in the
/// RON source and falls back to its default.
///
/// ```ron
/// (
///     decimal_places: 2,
///     tax_rate: "BAS Excluded",
///     invalid_allocation_policy: Skip,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Decimal places each non-final bucket is rounded to (2 for cents).
    pub decimal_places: u32,
    /// Tax rate label attached to every generated line item.
    pub tax_rate: String,
    pub invalid_allocation_policy: InvalidAllocationPolicy,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            tax_rate: "BAS Excluded".to_string(),
            invalid_allocation_policy: InvalidAllocationPolicy::default(),
        }
    }
}

impl CalculationConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, LoadError> {
        ron::from_str(s).map_err(|e| LoadError::invalid_ron("CalculationConfig", e))
    }

    pub fn from_file<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::from_ron_str(&fs::read_to_string(path)?)
    }
}
