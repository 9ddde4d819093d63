use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde_derive::Serialize;

/// Identifies the accounting period a bucket belongs to. Reversing entries
/// are always keyed by month, recognition buckets by month or by the first
/// day of the week (part) they cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodKey {
    Month { year: i32, month: u32 },
    Week { start: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub account_code: String,
    pub description: String,
    pub debit_amount: Decimal,
    pub credit_amount: Decimal,
    pub store: String,
    pub tax_rate: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBucket {
    pub key: PeriodKey,
    /// Month name ("January 2025"), week label ("Week 3", "Week 5A") or
    /// "Reversing entry".
    pub label: String,
    pub description: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub days: i64,
    pub amount: Decimal,
    pub status: String,
    pub is_reversing_entry: bool,
    pub running_unrecognized_balance: Decimal,
    pub running_recognized_balance: Decimal,
    pub line_items: Vec<LineItem>,
}

// --

impl PeriodKey {
    pub fn month_of(date: NaiveDate) -> Self {
        PeriodKey::Month {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodKey::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            PeriodKey::Week { start } => write!(f, "{}", start.format("%Y-%m-%d")),
        }
    }
}

impl serde::Serialize for PeriodKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl PeriodBucket {
    pub fn total_debits(&self) -> Decimal {
        self.line_items.iter().map(|l| l.debit_amount).sum()
    }

    pub fn total_credits(&self) -> Decimal {
        self.line_items.iter().map(|l| l.credit_amount).sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.total_debits() == self.total_credits()
    }
}
