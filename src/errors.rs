use chrono::NaiveDate;
use thiserror::Error;

// Calculation-related.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("Expense paid date, recognition start date and recognition end date are required.")]
    MissingDates,
    #[error("Invalid date for '{field}': '{value}'.")]
    InvalidDateValues { field: String, value: String },
    #[error("Expense paid date cannot be the same as the recognition start date")]
    InvalidDateRelationship,
    #[error("Recognition end date ({end}) cannot be before the recognition start date ({start}).")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
    #[error("Unknown schedule type: '{0}'.")]
    UnknownScheduleType(String),
    #[error("Invalid amount for '{field}': '{value}'.")]
    InvalidAmount { field: String, value: String },
    #[error("Store allocation for '{store}' failed: {source}")]
    AllocationError {
        store: String,
        #[source]
        source: Box<CalculationError>,
    },
    #[error("No valid store allocations to combine.")]
    NoValidAllocations,
    #[error("Date arithmetic out of range near {0}.")]
    DateOutOfRange(NaiveDate),
}

impl CalculationError {
    pub(crate) fn for_store(self, store: &str) -> Self {
        CalculationError::AllocationError {
            store: store.to_string(),
            source: Box::new(self),
        }
    }
}

// IO- and parsing-related.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error reading file: {0}.")]
    ReadError(#[from] std::io::Error),
    #[error("Invalid CSV format: {0}.")]
    InvalidCsv(#[from] csv::Error),
    #[error("Invalid {ron_type} (invalid RON format): {details}.")]
    InvalidRon { ron_type: String, details: String },
}

impl LoadError {
    pub(crate) fn invalid_ron(ron_type: &str, e: impl std::fmt::Display) -> Self {
        LoadError::InvalidRon {
            ron_type: ron_type.to_string(),
            details: e.to_string(),
        }
    }
}
