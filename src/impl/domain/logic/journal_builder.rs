use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    config::CalculationConfig,
    entities::{
        JournalInput, JournalSchedule, JournalType, LineItem, PeriodBucket, PeriodKey,
        ScheduleType,
    },
    errors::CalculationError,
};

use super::period_utils::{
    allocate_grouped_amounts, days_between_inclusive, month_start_date, monthly_periods,
    weekly_periods,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValidatedDates {
    pub(crate) expense_paid_date: NaiveDate,
    pub(crate) period_start: NaiveDate,
    pub(crate) period_end: NaiveDate,
}

/// Checks, in order: all dates present, paid date not exactly on the
/// recognition start, recognition period not inverted.
pub(crate) fn validate_dates(
    expense_paid_date: Option<NaiveDate>,
    period_start: Option<NaiveDate>,
    period_end: Option<NaiveDate>,
) -> Result<ValidatedDates, CalculationError> {
    let (Some(expense_paid_date), Some(period_start), Some(period_end)) =
        (expense_paid_date, period_start, period_end)
    else {
        return Err(CalculationError::MissingDates);
    };
    if expense_paid_date == period_start {
        return Err(CalculationError::InvalidDateRelationship);
    }
    if period_end < period_start {
        return Err(CalculationError::InvalidPeriod {
            start: period_start,
            end: period_end,
        });
    }
    Ok(ValidatedDates {
        expense_paid_date,
        period_start,
        period_end,
    })
}

/// Paid on or before the recognition start is a prepayment, anything later
/// is an accrual.
pub(crate) fn classify(expense_paid_date: NaiveDate, period_start: NaiveDate) -> JournalType {
    if expense_paid_date <= period_start {
        JournalType::Prepayment
    } else {
        JournalType::Accrual
    }
}

/// Debit/credit pair for `amount`. Negative amounts swap the legs so both
/// sides always carry a non-negative value.
pub(crate) struct LinePair<'a> {
    pub(crate) id_prefix: String,
    pub(crate) debit_account: &'a str,
    pub(crate) credit_account: &'a str,
    pub(crate) amount: Decimal,
    pub(crate) description: &'a str,
    pub(crate) store: &'a str,
    pub(crate) tax_rate: &'a str,
    pub(crate) date: NaiveDate,
}

impl LinePair<'_> {
    pub(crate) fn into_line_items(self) -> Vec<LineItem> {
        let (debit_account, credit_account) = if self.amount.is_sign_negative() {
            (self.credit_account, self.debit_account)
        } else {
            (self.debit_account, self.credit_account)
        };
        let amount = self.amount.abs();
        vec![
            LineItem {
                id: format!("{}/1", self.id_prefix),
                account_code: debit_account.to_string(),
                description: self.description.to_string(),
                debit_amount: amount,
                credit_amount: Decimal::ZERO,
                store: self.store.to_string(),
                tax_rate: self.tax_rate.to_string(),
                date: self.date,
            },
            LineItem {
                id: format!("{}/2", self.id_prefix),
                account_code: credit_account.to_string(),
                description: self.description.to_string(),
                debit_amount: Decimal::ZERO,
                credit_amount: amount,
                store: self.store.to_string(),
                tax_rate: self.tax_rate.to_string(),
                date: self.date,
            },
        ]
    }
}

pub(crate) fn line_id_prefix(scope: &str, key: &PeriodKey, kind: &str) -> String {
    if scope.is_empty() {
        format!("{}/{}", key, kind)
    } else {
        format!("{}/{}/{}", scope, key, kind)
    }
}

/// A slice of the recognition period, before an amount is assigned.
struct RecognitionPeriod {
    /// Periods sharing a group (the two parts of a split week) are allocated
    /// as one before being divided.
    group: u32,
    key: PeriodKey,
    label: String,
    period_start: NaiveDate,
    period_end: NaiveDate,
    num_days: i64,
    posting_date: NaiveDate,
}

/// Builds the schedule of a single (one-store) journal.
pub(crate) struct JournalBuilder<'a> {
    input: &'a JournalInput,
    config: &'a CalculationConfig,
    /// Leading segment of every line item id, the store by default.
    line_id_scope: String,
}

impl<'a> JournalBuilder<'a> {
    pub(crate) fn new(input: &'a JournalInput, config: &'a CalculationConfig) -> Self {
        Self {
            input,
            config,
            line_id_scope: input.store.clone(),
        }
    }

    pub(crate) fn with_line_id_scope(mut self, line_id_scope: String) -> Self {
        self.line_id_scope = line_id_scope;
        self
    }

    pub(crate) fn build(self) -> Result<JournalSchedule, CalculationError> {
        let dates = validate_dates(
            self.input.expense_paid_date,
            self.input.period_start,
            self.input.period_end,
        )?;
        let journal_type = classify(dates.expense_paid_date, dates.period_start);
        debug!(
            description = %self.input.description,
            store = %self.input.store,
            %journal_type,
            schedule_type = %self.input.schedule_type,
            "building journal schedule"
        );

        let periods = match self.input.schedule_type {
            ScheduleType::Monthly => Self::monthly_recognition_periods(&dates)?,
            ScheduleType::Weekly => Self::weekly_recognition_periods(&dates)?,
        };
        let total_days = days_between_inclusive(dates.period_start, dates.period_end);
        let mut groups: Vec<Vec<i64>> = Vec::new();
        for (i, period) in periods.iter().enumerate() {
            if i > 0 && periods[i - 1].group == period.group {
                if let Some(parts) = groups.last_mut() {
                    parts.push(period.num_days);
                    continue;
                }
            }
            groups.push(vec![period.num_days]);
        }
        let amounts = allocate_grouped_amounts(
            self.input.total_amount,
            &groups,
            total_days,
            self.config.decimal_places,
        );

        let mut buckets = Vec::with_capacity(periods.len() + 1);
        buckets.push(self.reversing_bucket(&dates, journal_type, total_days));
        let mut recognized = Decimal::ZERO;
        for (period, amount) in periods.into_iter().zip(amounts) {
            recognized += amount;
            buckets.push(self.recognition_bucket(period, amount, recognized, journal_type));
        }

        Ok(JournalSchedule {
            journal_type,
            schedule_type: Some(self.input.schedule_type),
            buckets,
        })
    }

    fn monthly_recognition_periods(
        dates: &ValidatedDates,
    ) -> Result<Vec<RecognitionPeriod>, CalculationError> {
        Ok(monthly_periods(dates.period_start, dates.period_end)?
            .into_iter()
            .zip(0..)
            .map(|(p, group)| RecognitionPeriod {
                group,
                key: PeriodKey::month_of(p.period_start),
                label: p.period_start.format("%B %Y").to_string(),
                period_start: p.period_start,
                period_end: p.period_end,
                num_days: p.num_days,
                // For consistency, record all recognition on the last day of
                // each month.
                posting_date: p.month_end,
            })
            .collect())
    }

    fn weekly_recognition_periods(
        dates: &ValidatedDates,
    ) -> Result<Vec<RecognitionPeriod>, CalculationError> {
        Ok(weekly_periods(dates.period_start, dates.period_end)?
            .into_iter()
            .map(|p| RecognitionPeriod {
                group: p.week_number,
                // Keyed by the Monday, or by the first of the month when the
                // week began in the previous month, so a key never spans two
                // months and means the same thing for every store.
                key: PeriodKey::Week {
                    start: std::cmp::max(p.week_start, month_start_date(p.period_start)),
                },
                label: p.label(),
                period_start: p.period_start,
                period_end: p.period_end,
                num_days: p.num_days,
                posting_date: p.period_end,
            })
            .collect())
    }

    /// Full amount into the control account on the payment date, to be
    /// unwound by the recognition buckets.
    fn reversing_bucket(
        &self,
        dates: &ValidatedDates,
        journal_type: JournalType,
        total_days: i64,
    ) -> PeriodBucket {
        let input = self.input;
        let key = PeriodKey::month_of(dates.expense_paid_date);
        let description = match journal_type {
            JournalType::Accrual => format!("Accrual: {}", input.description),
            _ => format!("Prepayment: {}", input.description),
        };
        let line_items = LinePair {
            id_prefix: line_id_prefix(&self.line_id_scope, &key, "rev"),
            debit_account: &input.primary_account_code,
            credit_account: &input.transfer_account_code,
            amount: input.total_amount,
            description: &description,
            store: &input.store,
            tax_rate: &self.config.tax_rate,
            date: dates.expense_paid_date,
        }
        .into_line_items();
        PeriodBucket {
            key,
            label: "Reversing entry".to_string(),
            description: input.description.clone(),
            period_start: dates.period_start,
            period_end: dates.period_end,
            days: total_days,
            amount: input.total_amount,
            status: input.status.clone(),
            is_reversing_entry: true,
            running_unrecognized_balance: input.total_amount,
            running_recognized_balance: Decimal::ZERO,
            line_items,
        }
    }

    /// Moves one period's share from the control account into the expense
    /// account.
    fn recognition_bucket(
        &self,
        period: RecognitionPeriod,
        amount: Decimal,
        recognized: Decimal,
        journal_type: JournalType,
    ) -> PeriodBucket {
        let input = self.input;
        let description = format!(
            "Recognize {}: {} for period {} to {}",
            journal_type, input.description, period.period_start, period.period_end
        );
        let line_items = LinePair {
            id_prefix: line_id_prefix(&self.line_id_scope, &period.key, "rec"),
            debit_account: &input.transfer_account_code,
            credit_account: &input.primary_account_code,
            amount,
            description: &description,
            store: &input.store,
            tax_rate: &self.config.tax_rate,
            date: period.posting_date,
        }
        .into_line_items();
        PeriodBucket {
            key: period.key,
            label: period.label,
            description: input.description.clone(),
            period_start: period.period_start,
            period_end: period.period_end,
            days: period.num_days,
            amount,
            status: input.status.clone(),
            is_reversing_entry: false,
            running_unrecognized_balance: input.total_amount - recognized,
            running_recognized_balance: recognized,
            line_items,
        }
    }
}
