use serde_derive::Serialize;

/// How a recognition period is sliced into buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    /// One bucket per calendar month touched by the period.
    Monthly,
    /// One bucket per Mon-Sun week, split again where a week crosses a month
    /// boundary.
    Weekly,
}

/// Derived from dates, never chosen freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalType {
    /// Expense paid on or before the start of the recognition period.
    Prepayment,
    /// Expense paid after the start of the recognition period.
    Accrual,
    /// Multi-store journal whose allocations disagree.
    Mixed,
    Stock,
}

impl std::fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleType::Monthly => write!(f, "monthly"),
            ScheduleType::Weekly => write!(f, "weekly"),
        }
    }
}

impl std::fmt::Display for JournalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JournalType::Prepayment => write!(f, "prepayment"),
            JournalType::Accrual => write!(f, "accrual"),
            JournalType::Mixed => write!(f, "mixed"),
            JournalType::Stock => write!(f, "stock"),
        }
    }
}
