use serde_derive::Deserialize;

/// Journal input as it arrives from a form, CSV row or JSON payload: dates
/// and amounts are still text. Converted once into a `JournalInput` before
/// any calculation happens.
///
/// Dates are ISO `YYYY-MM-DD`; an absent or blank date counts as missing.
/// Amounts accept thousands separators and parenthesised negatives, e.g.
/// `"(1,200.00)"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawJournalInput {
    pub description: String,
    pub total_amount: String,
    pub expense_paid_date: Option<String>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub schedule_type: String,
    pub primary_account_code: String,
    pub transfer_account_code: String,
    pub store: String,
    pub status: String,
    pub store_allocations: Vec<RawStoreAllocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawStoreAllocation {
    pub id: String,
    pub description: String,
    pub total_amount: String,
    pub expense_paid_date: Option<String>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub primary_account_code: String,
    pub transfer_account_code: String,
    pub store: String,
    pub status: String,
}
