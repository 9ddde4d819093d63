use serde_derive::Serialize;

use crate::errors::CalculationError;

use super::{
    period_bucket::PeriodBucket,
    schedule_type::{JournalType, ScheduleType},
};

/// Successful calculation: the journal type and its buckets, reversing
/// entries first, then recognition buckets in period order.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalSchedule {
    pub journal_type: JournalType,
    /// `None` for stock journals, which aren't spread over a schedule.
    pub schedule_type: Option<ScheduleType>,
    pub buckets: Vec<PeriodBucket>,
}

/// Result value handed back to callers. Exactly one of `error` or the
/// breakdowns is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalCalculation {
    #[serde(rename = "type")]
    pub journal_type: Option<JournalType>,
    pub monthly_breakdown: Vec<PeriodBucket>,
    pub weekly_breakdown: Vec<PeriodBucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// --

impl JournalSchedule {
    pub fn recognition_buckets(&self) -> impl Iterator<Item = &PeriodBucket> {
        self.buckets.iter().filter(|b| !b.is_reversing_entry)
    }
}

impl JournalCalculation {
    pub fn failed(error: &CalculationError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Whichever breakdown carries the buckets.
    pub fn buckets(&self) -> &[PeriodBucket] {
        if self.weekly_breakdown.is_empty() {
            &self.monthly_breakdown
        } else {
            &self.weekly_breakdown
        }
    }
}

impl From<JournalSchedule> for JournalCalculation {
    fn from(schedule: JournalSchedule) -> Self {
        let JournalSchedule {
            journal_type,
            schedule_type,
            buckets,
        } = schedule;
        match schedule_type {
            Some(ScheduleType::Weekly) => JournalCalculation {
                journal_type: Some(journal_type),
                weekly_breakdown: buckets,
                ..Default::default()
            },
            Some(ScheduleType::Monthly) | None => JournalCalculation {
                journal_type: Some(journal_type),
                monthly_breakdown: buckets,
                ..Default::default()
            },
        }
    }
}

impl From<Result<JournalSchedule, CalculationError>> for JournalCalculation {
    fn from(result: Result<JournalSchedule, CalculationError>) -> Self {
        match result {
            Ok(schedule) => schedule.into(),
            Err(e) => JournalCalculation::failed(&e),
        }
    }
}
