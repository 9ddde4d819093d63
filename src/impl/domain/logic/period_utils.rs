use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::CalculationError;

/// Number of calendar days from `start` to `end`, both included.
pub(crate) fn days_between_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Returns the first day of the month of the given date.
pub(crate) fn month_start_date(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .expect("copying a NaiveDate with overridden day=1 should never fail")
}

pub(crate) fn first_of_next_month(date: NaiveDate) -> Result<NaiveDate, CalculationError> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalculationError::DateOutOfRange(date))
}

/// Returns the last day of the month of the given date.
pub(crate) fn month_end_date(date: NaiveDate) -> Result<NaiveDate, CalculationError> {
    Ok(first_of_next_month(date)? - Duration::days(1))
}

/// Returns the last day of each month between the given dates.
pub(crate) fn month_end_dates(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<NaiveDate>, CalculationError> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        let next_month = first_of_next_month(current)?;
        let last_day = next_month - Duration::days(1);
        if last_day >= start {
            dates.push(last_day);
        }
        current = next_month;
    }
    Ok(dates)
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthPeriod {
    /// Part of the month covered by the range (usually the whole month, but
    /// clipped at either end of the range).
    pub(crate) period_start: NaiveDate,
    pub(crate) period_end: NaiveDate,
    pub(crate) num_days: i64,
    /// Last day of the calendar month, where recognition is posted.
    pub(crate) month_end: NaiveDate,
}

/// One period per calendar month touched by `[start, end]`, in order.
pub(crate) fn monthly_periods(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<MonthPeriod>, CalculationError> {
    month_end_dates(start, end)?
        .into_iter()
        .map(|month_end| {
            let period_start = std::cmp::max(start, month_start_date(month_end));
            let period_end = std::cmp::min(end, month_end);
            Ok(MonthPeriod {
                period_start,
                period_end,
                num_days: days_between_inclusive(period_start, period_end),
                month_end,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WeekPart {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WeekPeriod {
    /// Monday of the (unclipped) week.
    pub(crate) week_start: NaiveDate,
    /// 1-based position of the week within the range.
    pub(crate) week_number: u32,
    /// Set when the week crosses a month boundary and was split.
    pub(crate) part: Option<WeekPart>,
    pub(crate) period_start: NaiveDate,
    pub(crate) period_end: NaiveDate,
    pub(crate) num_days: i64,
}

impl WeekPeriod {
    pub(crate) fn label(&self) -> String {
        match self.part {
            None => format!("Week {}", self.week_number),
            Some(WeekPart::A) => format!("Week {}A", self.week_number),
            Some(WeekPart::B) => format!("Week {}B", self.week_number),
        }
    }
}

/// Monday-starting weeks touching `[start, end]`, each clipped to the range.
/// A week whose clipped days fall in two calendar months is returned as two
/// parts, A up to the month end and B from the first of the next month.
pub(crate) fn weekly_periods(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<WeekPeriod>, CalculationError> {
    let mut periods = Vec::new();
    let mut week_start = start
        .checked_sub_signed(Duration::days(i64::from(
            start.weekday().num_days_from_monday(),
        )))
        .ok_or(CalculationError::DateOutOfRange(start))?;
    let mut week_number = 1;
    while week_start <= end {
        // Past the last representable date the week is clipped to `end`
        // anyway.
        let week_end = week_start
            .checked_add_signed(Duration::days(6))
            .unwrap_or(NaiveDate::MAX);
        let period_start = std::cmp::max(start, week_start);
        let period_end = std::cmp::min(end, week_end);
        if (period_start.year(), period_start.month()) == (period_end.year(), period_end.month()) {
            periods.push(WeekPeriod {
                week_start,
                week_number,
                part: None,
                period_start,
                period_end,
                num_days: days_between_inclusive(period_start, period_end),
            });
        } else {
            let part_a_end = month_end_date(period_start)?;
            let part_b_start = part_a_end
                .succ_opt()
                .ok_or(CalculationError::DateOutOfRange(part_a_end))?;
            periods.push(WeekPeriod {
                week_start,
                week_number,
                part: Some(WeekPart::A),
                period_start,
                period_end: part_a_end,
                num_days: days_between_inclusive(period_start, part_a_end),
            });
            periods.push(WeekPeriod {
                week_start,
                week_number,
                part: Some(WeekPart::B),
                period_start: part_b_start,
                period_end,
                num_days: days_between_inclusive(part_b_start, period_end),
            });
        }
        match week_start.checked_add_signed(Duration::days(7)) {
            Some(next) => week_start = next,
            None => break,
        }
        week_number += 1;
    }
    Ok(periods)
}

/// Amount recognized in one bucket.
///
/// Every bucket but the last gets its day-proportional share of `total`,
/// rounded to `decimal_places`. The last bucket absorbs whatever is left so
/// that the buckets always add up to `total` exactly.
pub(crate) fn allocate_amount(
    total: Decimal,
    bucket_days: i64,
    total_days: i64,
    bucket_index: usize,
    bucket_count: usize,
    allocated_so_far: Decimal,
    decimal_places: u32,
) -> Decimal {
    if bucket_index + 1 >= bucket_count || total_days <= 0 {
        return total - allocated_so_far;
    }
    let daily_rate = total / Decimal::from(total_days);
    (daily_rate * Decimal::from(bucket_days))
        .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies `allocate_amount` across all buckets, in order.
pub(crate) fn allocate_amounts(
    total: Decimal,
    bucket_days: &[i64],
    total_days: i64,
    decimal_places: u32,
) -> Vec<Decimal> {
    let mut allocated_so_far = Decimal::ZERO;
    bucket_days
        .iter()
        .enumerate()
        .map(|(i, days)| {
            let amount = allocate_amount(
                total,
                *days,
                total_days,
                i,
                bucket_days.len(),
                allocated_so_far,
                decimal_places,
            );
            allocated_so_far += amount;
            amount
        })
        .collect()
}

/// Two-level allocation: `total` is first spread over groups (a week), then
/// each group's amount over its parts (the halves of a week split at a month
/// end). A split group therefore adds up to exactly what it would have been
/// allocated undivided.
pub(crate) fn allocate_grouped_amounts(
    total: Decimal,
    groups: &[Vec<i64>],
    total_days: i64,
    decimal_places: u32,
) -> Vec<Decimal> {
    let group_days: Vec<i64> = groups.iter().map(|parts| parts.iter().sum()).collect();
    let group_amounts = allocate_amounts(total, &group_days, total_days, decimal_places);
    groups
        .iter()
        .zip(group_days)
        .zip(group_amounts)
        .flat_map(|((parts, days), amount)| allocate_amounts(amount, parts, days, decimal_places))
        .collect()
}
