use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::schedule_type::ScheduleType;

/// A lump-sum expense to be recognized over a period.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalInput {
    pub description: String,
    /// May be negative (credit-direction adjustment).
    pub total_amount: Decimal,
    pub expense_paid_date: Option<NaiveDate>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub schedule_type: ScheduleType,
    /// Prepayment or accrual control account.
    pub primary_account_code: String,
    /// Expense account the amount is recognized into.
    pub transfer_account_code: String,
    pub store: String,
    pub status: String,
    /// When non-empty, the journal is calculated per store and combined; the
    /// journal-level amount, dates and accounts are then ignored.
    pub store_allocations: Vec<StoreAllocation>,
}

/// One store's share of a multi-store journal. Uses the schedule type of the
/// journal it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreAllocation {
    pub id: String,
    pub description: String,
    pub total_amount: Decimal,
    pub expense_paid_date: Option<NaiveDate>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub primary_account_code: String,
    pub transfer_account_code: String,
    pub store: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockJournalInput {
    pub description: String,
    pub opening_value: Decimal,
    pub closing_value: Decimal,
    pub closing_date: NaiveDate,
    pub stock_account_code: String,
    /// Stock movement / COGS account.
    pub movement_account_code: String,
    pub store: String,
    pub status: String,
}

// --

impl StoreAllocation {
    /// Standalone single-store journal for this allocation. Nested
    /// allocations are always cleared so the result can't recurse.
    pub(crate) fn to_journal_input(&self, schedule_type: ScheduleType) -> JournalInput {
        JournalInput {
            description: self.description.clone(),
            total_amount: self.total_amount,
            expense_paid_date: self.expense_paid_date,
            period_start: self.period_start,
            period_end: self.period_end,
            schedule_type,
            primary_account_code: self.primary_account_code.clone(),
            transfer_account_code: self.transfer_account_code.clone(),
            store: self.store.clone(),
            status: self.status.clone(),
            store_allocations: Vec::new(),
        }
    }
}
