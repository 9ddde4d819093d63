//! End-to-end journal scenarios through the public API.

use chrono::NaiveDate;
use fractic_ifrs_journals::{
    calculate_journal, calculate_stock_journal,
    config::{CalculationConfig, InvalidAllocationPolicy},
    entities::{
        JournalInput, JournalType, PeriodBucket, PeriodKey, RawJournalInput, RawStoreAllocation,
        ScheduleType, StockJournalInput, StoreAllocation,
    },
    errors::CalculationError,
    JournalUtil,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn journal(
    total: Decimal,
    paid: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
    schedule_type: ScheduleType,
) -> JournalInput {
    JournalInput {
        description: "Annual insurance".to_string(),
        total_amount: total,
        expense_paid_date: Some(paid),
        period_start: Some(start),
        period_end: Some(end),
        schedule_type,
        primary_account_code: "1400".to_string(),
        transfer_account_code: "6100".to_string(),
        store: "North".to_string(),
        status: "Draft".to_string(),
        store_allocations: Vec::new(),
    }
}

fn allocation(store: &str, total: Decimal, paid: NaiveDate) -> StoreAllocation {
    StoreAllocation {
        id: format!("alloc-{}", store),
        description: format!("Cleaning {}", store),
        total_amount: total,
        expense_paid_date: Some(paid),
        period_start: Some(date(2025, 6, 1)),
        period_end: Some(date(2025, 6, 30)),
        primary_account_code: "2150".to_string(),
        transfer_account_code: "6300".to_string(),
        store: store.to_string(),
        status: "Draft".to_string(),
    }
}

fn recognition_total(buckets: &[PeriodBucket]) -> Decimal {
    buckets
        .iter()
        .filter(|b| !b.is_reversing_entry)
        .map(|b| b.amount)
        .sum()
}

#[test]
fn yearly_monthly_schedule_reproduces_total() {
    let result = calculate_journal(&journal(
        dec!(1200),
        date(2025, 1, 15),
        date(2025, 1, 1),
        date(2025, 12, 31),
        ScheduleType::Monthly,
    ));
    assert!(result.is_ok());
    // Paid after the recognition start.
    assert_eq!(result.journal_type, Some(JournalType::Accrual));
    assert!(result.weekly_breakdown.is_empty());

    let buckets = &result.monthly_breakdown;
    assert_eq!(buckets.len(), 13);
    assert!(buckets[0].is_reversing_entry);
    assert_eq!(buckets[0].key, PeriodKey::Month { year: 2025, month: 1 });
    assert_eq!(buckets[0].amount, dec!(1200));
    assert!(buckets[1..].iter().all(|b| !b.is_reversing_entry));

    // 1200 / 365 * 31
    assert_eq!(buckets[1].amount, dec!(101.92));
    assert_eq!(recognition_total(buckets), dec!(1200.00));
    let before_december: Decimal = buckets[1..12].iter().map(|b| b.amount).sum();
    assert_eq!(buckets[12].amount, dec!(1200) - before_december);
    assert_eq!(buckets[12].running_unrecognized_balance, Decimal::ZERO);
    assert_eq!(buckets[12].running_recognized_balance, dec!(1200));
}

#[test]
fn paid_on_start_date_is_rejected() {
    let result = calculate_journal(&journal(
        dec!(1200),
        date(2025, 1, 1),
        date(2025, 1, 1),
        date(2025, 12, 31),
        ScheduleType::Monthly,
    ));
    assert_eq!(
        result.error.as_deref(),
        Some("Expense paid date cannot be the same as the recognition start date")
    );
    assert_eq!(result.journal_type, None);
    assert!(result.monthly_breakdown.is_empty());
    assert!(result.weekly_breakdown.is_empty());
}

#[test]
fn missing_dates_are_rejected() {
    let mut input = journal(
        dec!(100),
        date(2024, 12, 1),
        date(2025, 1, 1),
        date(2025, 1, 31),
        ScheduleType::Monthly,
    );
    input.period_end = None;
    let result = calculate_journal(&input);
    assert_eq!(
        result.error,
        Some(CalculationError::MissingDates.to_string())
    );
}

#[test]
fn classification_follows_dates() {
    let prepaid = calculate_journal(&journal(
        dec!(100),
        date(2024, 12, 31),
        date(2025, 1, 1),
        date(2025, 3, 31),
        ScheduleType::Monthly,
    ));
    assert_eq!(prepaid.journal_type, Some(JournalType::Prepayment));

    let accrued = calculate_journal(&journal(
        dec!(100),
        date(2025, 4, 15),
        date(2025, 1, 1),
        date(2025, 3, 31),
        ScheduleType::Monthly,
    ));
    assert_eq!(accrued.journal_type, Some(JournalType::Accrual));
    assert_eq!(
        accrued.monthly_breakdown[0].key,
        PeriodKey::Month { year: 2025, month: 4 }
    );
}

#[test]
fn weekly_schedule_splits_weeks_at_month_end() {
    // Thursday 2025-01-16 to Sunday 2025-02-09.
    let result = calculate_journal(&journal(
        dec!(250),
        date(2025, 1, 2),
        date(2025, 1, 16),
        date(2025, 2, 9),
        ScheduleType::Weekly,
    ));
    assert!(result.monthly_breakdown.is_empty());
    let buckets = &result.weekly_breakdown;
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Reversing entry", "Week 1", "Week 2", "Week 3A", "Week 3B", "Week 4"]
    );
    assert_eq!(buckets[3].days + buckets[4].days, 7);
    assert_eq!(buckets[3].key, PeriodKey::Week { start: date(2025, 1, 27) });
    assert_eq!(buckets[4].key, PeriodKey::Week { start: date(2025, 2, 1) });
    // 25 days in total, 10.00 per day.
    assert_eq!(buckets[1].amount, dec!(40.00));
    assert_eq!(buckets[3].amount + buckets[4].amount, dec!(70.00));
    assert_eq!(recognition_total(buckets), dec!(250));
}

#[test]
fn every_bucket_balances() {
    let result = calculate_journal(&journal(
        dec!(-1000.01),
        date(2025, 3, 10),
        date(2025, 2, 14),
        date(2025, 9, 3),
        ScheduleType::Weekly,
    ));
    assert!(result.is_ok());
    for bucket in &result.weekly_breakdown {
        assert!(bucket.is_balanced(), "unbalanced bucket {}", bucket.key);
        for pair in bucket.line_items.chunks(2) {
            assert_eq!(pair[0].debit_amount, pair[1].credit_amount);
            assert_eq!(pair[0].credit_amount, Decimal::ZERO);
            assert_eq!(pair[1].debit_amount, Decimal::ZERO);
        }
    }
    assert_eq!(recognition_total(&result.weekly_breakdown), dec!(-1000.01));
}

#[test]
fn identical_input_gives_identical_output() {
    let input = journal(
        dec!(777.77),
        date(2025, 2, 3),
        date(2025, 1, 20),
        date(2025, 5, 11),
        ScheduleType::Weekly,
    );
    assert_eq!(calculate_journal(&input), calculate_journal(&input));
}

#[test]
fn two_stores_same_month_are_combined() {
    let mut input = journal(
        Decimal::ZERO,
        date(2025, 5, 1),
        date(2025, 6, 1),
        date(2025, 6, 30),
        ScheduleType::Monthly,
    );
    input.store_allocations = vec![
        allocation("North", dec!(100), date(2025, 5, 20)),
        allocation("South", dec!(50), date(2025, 5, 28)),
    ];
    let result = calculate_journal(&input);
    assert_eq!(result.journal_type, Some(JournalType::Prepayment));

    let june = result
        .monthly_breakdown
        .iter()
        .find(|b| !b.is_reversing_entry && b.key == PeriodKey::Month { year: 2025, month: 6 })
        .unwrap();
    assert_eq!(june.amount, dec!(150));
    assert_eq!(june.line_items.len(), 4);
    assert_eq!(june.description, "Multi-store: North, South");
    let stores: Vec<&str> = june.line_items.iter().map(|l| l.store.as_str()).collect();
    assert_eq!(stores, vec!["North", "North", "South", "South"]);
}

#[test]
fn prepaid_and_accrued_stores_make_mixed_journal() {
    let mut input = journal(
        Decimal::ZERO,
        date(2025, 5, 1),
        date(2025, 6, 1),
        date(2025, 6, 30),
        ScheduleType::Monthly,
    );
    input.store_allocations = vec![
        allocation("North", dec!(100), date(2025, 5, 20)),
        allocation("South", dec!(50), date(2025, 7, 15)),
    ];
    let result = calculate_journal(&input);
    assert_eq!(result.journal_type, Some(JournalType::Mixed));
    let reversing: Vec<_> = result
        .monthly_breakdown
        .iter()
        .filter(|b| b.is_reversing_entry)
        .collect();
    assert_eq!(reversing.len(), 2);
    assert!(!result.monthly_breakdown[0].line_items.is_empty());
}

#[test]
fn failing_store_is_named() {
    let mut input = journal(
        Decimal::ZERO,
        date(2025, 5, 1),
        date(2025, 6, 1),
        date(2025, 6, 30),
        ScheduleType::Monthly,
    );
    let mut broken = allocation("South", dec!(50), date(2025, 6, 1));
    broken.expense_paid_date = Some(date(2025, 6, 1));
    input.store_allocations = vec![allocation("North", dec!(100), date(2025, 5, 20)), broken];
    let result = calculate_journal(&input);
    let error = result.error.unwrap();
    assert!(error.contains("South"), "{}", error);
    assert!(result.monthly_breakdown.is_empty());
}

#[test]
fn skip_policy_drops_store_without_dates() {
    let util = JournalUtil::new(CalculationConfig {
        invalid_allocation_policy: InvalidAllocationPolicy::Skip,
        ..Default::default()
    });
    let mut input = journal(
        Decimal::ZERO,
        date(2025, 5, 1),
        date(2025, 6, 1),
        date(2025, 6, 30),
        ScheduleType::Monthly,
    );
    let mut undated = allocation("South", dec!(50), date(2025, 5, 1));
    undated.period_start = None;
    input.store_allocations = vec![allocation("North", dec!(100), date(2025, 5, 20)), undated];
    let schedule = util.calculate(&input).unwrap();
    assert_eq!(recognition_total(&schedule.buckets), dec!(100));
}

#[test]
fn skip_policy_drops_store_with_unparseable_date() {
    let allocation = |store: &str, total: &str, period_end: &str| RawStoreAllocation {
        id: format!("alloc-{}", store),
        store: store.to_string(),
        total_amount: total.to_string(),
        expense_paid_date: Some("2025-05-20".to_string()),
        period_start: Some("2025-06-01".to_string()),
        period_end: Some(period_end.to_string()),
        ..Default::default()
    };
    let raw = RawJournalInput {
        description: "Cleaning".to_string(),
        schedule_type: "monthly".to_string(),
        store_allocations: vec![
            allocation("North", "100", "2025-06-30"),
            allocation("South", "50", "2025-13-01"),
        ],
        ..Default::default()
    };

    let skipping = JournalUtil::new(CalculationConfig {
        invalid_allocation_policy: InvalidAllocationPolicy::Skip,
        ..Default::default()
    });
    let result = skipping.calculate_raw(raw.clone());
    assert!(result.is_ok(), "{:?}", result.error);
    assert_eq!(recognition_total(&result.monthly_breakdown), dec!(100));
    assert!(result
        .monthly_breakdown
        .iter()
        .flat_map(|b| &b.line_items)
        .all(|l| l.store == "North"));

    let rejected = JournalUtil::default().calculate_raw(raw);
    assert!(rejected.error.unwrap().contains("South"));
}

#[test]
fn stock_increase_journal() {
    let result = calculate_stock_journal(&StockJournalInput {
        description: "Stocktake".to_string(),
        opening_value: dec!(45000.00),
        closing_value: dec!(46500.00),
        closing_date: date(2025, 6, 30),
        stock_account_code: "1300".to_string(),
        movement_account_code: "5100".to_string(),
        store: "North".to_string(),
        status: "Draft".to_string(),
    });
    assert_eq!(result.journal_type, Some(JournalType::Stock));
    assert_eq!(result.monthly_breakdown.len(), 1);
    let lines = &result.monthly_breakdown[0].line_items;
    assert_eq!(lines[0].account_code, "1300");
    assert_eq!(lines[0].debit_amount, dec!(1500.00));
    assert_eq!(lines[1].account_code, "5100");
    assert_eq!(lines[1].credit_amount, dec!(1500.00));
}

#[test]
fn raw_input_reports_boundary_errors() {
    let util = JournalUtil::default();
    let raw = RawJournalInput {
        description: "Rent".to_string(),
        total_amount: "900".to_string(),
        expense_paid_date: Some("2024-12-15".to_string()),
        period_start: Some("2025-01-01".to_string()),
        period_end: Some("2025-03-31".to_string()),
        schedule_type: "monthly".to_string(),
        ..Default::default()
    };
    assert!(util.calculate_raw(raw.clone()).is_ok());

    let bad_date = util.calculate_raw(RawJournalInput {
        period_end: Some("2025-13-01".to_string()),
        ..raw.clone()
    });
    assert_eq!(
        bad_date.error,
        Some(
            CalculationError::InvalidDateValues {
                field: "period_end".to_string(),
                value: "2025-13-01".to_string(),
            }
            .to_string()
        )
    );

    let bad_schedule = util.calculate_raw(RawJournalInput {
        schedule_type: "daily".to_string(),
        ..raw.clone()
    });
    assert_eq!(
        bad_schedule.error,
        Some(CalculationError::UnknownScheduleType("daily".to_string()).to_string())
    );

    let legacy = util.calculate_raw(RawJournalInput {
        schedule_type: "monthly & weekly".to_string(),
        store_allocations: vec![RawStoreAllocation {
            store: "North".to_string(),
            total_amount: "(90.00)".to_string(),
            expense_paid_date: Some("2024-12-15".to_string()),
            period_start: Some("2025-01-01".to_string()),
            period_end: Some("2025-03-31".to_string()),
            ..Default::default()
        }],
        ..raw
    });
    assert_eq!(legacy.journal_type, Some(JournalType::Prepayment));
    assert_eq!(recognition_total(&legacy.monthly_breakdown), dec!(-90));
}

#[test]
fn calculation_serializes_for_the_ui() {
    let result = calculate_journal(&journal(
        dec!(300),
        date(2024, 12, 15),
        date(2025, 1, 1),
        date(2025, 3, 31),
        ScheduleType::Monthly,
    ));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["type"], "prepayment");
    assert_eq!(json["monthlyBreakdown"][0]["key"], "2024-12");
    assert_eq!(json["monthlyBreakdown"][0]["isReversingEntry"], true);
    assert_eq!(json["monthlyBreakdown"][1]["lineItems"][0]["accountCode"], "6100");
    assert!(json.get("error").is_none());
}
