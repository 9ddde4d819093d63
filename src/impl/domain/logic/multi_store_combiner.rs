use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::{
    config::{CalculationConfig, InvalidAllocationPolicy},
    entities::{JournalInput, JournalSchedule, JournalType, PeriodBucket, PeriodKey},
    errors::CalculationError,
};

use super::journal_builder::{classify, validate_dates, JournalBuilder};

/// Calculates each store allocation on its own and merges the results into a
/// single schedule, one bucket per period.
pub(crate) struct MultiStoreCombiner<'a> {
    input: &'a JournalInput,
    config: &'a CalculationConfig,
}

/// Buckets are grouped per phase first (reversing entries before
/// recognition), then per period key.
type GroupKey = (bool, PeriodKey);

impl<'a> MultiStoreCombiner<'a> {
    pub(crate) fn new(input: &'a JournalInput, config: &'a CalculationConfig) -> Self {
        Self { input, config }
    }

    pub(crate) fn build(self) -> Result<JournalSchedule, CalculationError> {
        let mut valid = Vec::new();
        for allocation in &self.input.store_allocations {
            match validate_dates(
                allocation.expense_paid_date,
                allocation.period_start,
                allocation.period_end,
            ) {
                Ok(dates) => valid.push((
                    allocation,
                    classify(dates.expense_paid_date, dates.period_start),
                )),
                Err(e @ (CalculationError::MissingDates | CalculationError::InvalidPeriod { .. }))
                    if self.config.invalid_allocation_policy == InvalidAllocationPolicy::Skip =>
                {
                    warn!(
                        allocation_id = %allocation.id,
                        store = %allocation.store,
                        error = %e,
                        "skipping store allocation with unusable dates"
                    );
                }
                Err(e) => return Err(e.for_store(&allocation.store)),
            }
        }
        if valid.is_empty() {
            return Err(CalculationError::NoValidAllocations);
        }

        let has_prepayment = valid.iter().any(|(_, t)| *t == JournalType::Prepayment);
        let has_accrual = valid.iter().any(|(_, t)| *t == JournalType::Accrual);
        let journal_type = match (has_prepayment, has_accrual) {
            (true, true) => JournalType::Mixed,
            (false, true) => JournalType::Accrual,
            _ => JournalType::Prepayment,
        };
        debug!(
            description = %self.input.description,
            allocations = valid.len(),
            %journal_type,
            "combining store allocations"
        );

        let mut groups: BTreeMap<GroupKey, Vec<PeriodBucket>> = BTreeMap::new();
        for (index, (allocation, _)) in valid.into_iter().enumerate() {
            let single = allocation.to_journal_input(self.input.schedule_type);
            // Stores may hold several allocations, so ids are scoped per
            // allocation.
            let allocation_id = if allocation.id.is_empty() {
                format!("#{}", index + 1)
            } else {
                allocation.id.clone()
            };
            let schedule = JournalBuilder::new(&single, self.config)
                .with_line_id_scope(format!("{}/{}", allocation.store, allocation_id))
                .build()
                .map_err(|e| e.for_store(&allocation.store))?;
            for bucket in schedule.buckets {
                groups
                    .entry((!bucket.is_reversing_entry, bucket.key))
                    .or_default()
                    .push(bucket);
            }
        }

        let buckets = groups
            .into_values()
            .filter_map(|group| self.merge(group))
            .collect();

        Ok(JournalSchedule {
            journal_type,
            schedule_type: Some(self.input.schedule_type),
            buckets,
        })
    }

    /// Folds same-period buckets of different stores into one.
    fn merge(&self, group: Vec<PeriodBucket>) -> Option<PeriodBucket> {
        let mut stores: Vec<&str> = Vec::new();
        for bucket in &group {
            for line in &bucket.line_items {
                if !stores.contains(&line.store.as_str()) {
                    stores.push(&line.store);
                }
            }
        }
        let multi_store = (stores.len() > 1).then(|| format!("Multi-store: {}", stores.join(", ")));

        let mut iter = group.into_iter();
        let first = iter.next()?;
        let description = multi_store.unwrap_or_else(|| first.description.clone());
        // Week numbers count from each store's own start, so they only carry
        // over when every store agrees.
        let label = if iter.as_slice().iter().all(|b| b.label == first.label) {
            first.label.clone()
        } else {
            key_label(&first.key)
        };
        let mut merged = PeriodBucket {
            label,
            description,
            status: self.input.status.clone(),
            ..first
        };
        for bucket in iter {
            merged.period_start = std::cmp::min(merged.period_start, bucket.period_start);
            merged.period_end = std::cmp::max(merged.period_end, bucket.period_end);
            merged.days = std::cmp::max(merged.days, bucket.days);
            merged.amount += bucket.amount;
            merged.running_unrecognized_balance += bucket.running_unrecognized_balance;
            merged.running_recognized_balance += bucket.running_recognized_balance;
            merged.line_items.extend(bucket.line_items);
        }
        Some(merged)
    }
}

fn key_label(key: &PeriodKey) -> String {
    match key {
        PeriodKey::Month { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1)
            .map_or_else(|| key.to_string(), |d| d.format("%B %Y").to_string()),
        PeriodKey::Week { start } => format!("Week of {}", start),
    }
}
