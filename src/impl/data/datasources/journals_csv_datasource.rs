use async_trait::async_trait;
use ron::from_str;

use crate::{
    entities::{RawJournalInput, RawStoreAllocation},
    errors::LoadError,
};

/// Reads one journal per CSV row. Columns, in order:
///
/// `description, total_amount, expense_paid_date, period_start, period_end,
/// schedule_type, primary_account_code, transfer_account_code, store, status,
/// store_allocations`
///
/// The last column holds zero or more comma-separated RON
/// `RawStoreAllocation` structs. Only the CSV and RON syntax is checked here;
/// dates, amounts and schedule types are validated per journal when it is
/// calculated.
#[async_trait]
pub(crate) trait JournalsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<RawJournalInput>, LoadError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<RawJournalInput>, LoadError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct JournalsCsvDatasourceImpl;

impl JournalsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

fn optional(field: Option<&str>) -> Option<String> {
    match field {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => None,
    }
}

#[async_trait]
impl JournalsCsvDatasource for JournalsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<RawJournalInput>, LoadError> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes())
            .records()
            .map(|r| -> Result<RawJournalInput, LoadError> {
                let r = r?;

                // Extract from CSV record.
                let raw_store_allocations = r.get(10).unwrap_or("").trim();

                // Parse.
                let store_allocations: Vec<RawStoreAllocation> =
                    if raw_store_allocations.is_empty() {
                        Vec::new()
                    } else {
                        from_str(&format!("[{}]", raw_store_allocations))
                            .map_err(|e| LoadError::invalid_ron("StoreAllocation", e))?
                    };

                // Build.
                Ok(RawJournalInput {
                    description: r.get(0).unwrap_or("").to_string(),
                    total_amount: r.get(1).unwrap_or("").to_string(),
                    expense_paid_date: optional(r.get(2)),
                    period_start: optional(r.get(3)),
                    period_end: optional(r.get(4)),
                    schedule_type: r.get(5).unwrap_or("").to_string(),
                    primary_account_code: r.get(6).unwrap_or("").to_string(),
                    transfer_account_code: r.get(7).unwrap_or("").to_string(),
                    store: r.get(8).unwrap_or("").to_string(),
                    status: r.get(9).unwrap_or("").to_string(),
                    store_allocations,
                })
            })
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<RawJournalInput>, LoadError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&tokio::fs::read_to_string(path).await?)
    }
}
