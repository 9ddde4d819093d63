use rust_decimal::Decimal;

use crate::{
    config::CalculationConfig,
    entities::{JournalSchedule, JournalType, PeriodBucket, PeriodKey, StockJournalInput},
    errors::CalculationError,
};

use super::{
    journal_builder::{line_id_prefix, LinePair},
    period_utils::{month_end_date, month_start_date},
};

/// Single-bucket journal for the change in stock value over a month.
pub(crate) struct StockJournalBuilder<'a> {
    input: &'a StockJournalInput,
    config: &'a CalculationConfig,
}

impl<'a> StockJournalBuilder<'a> {
    pub(crate) fn new(input: &'a StockJournalInput, config: &'a CalculationConfig) -> Self {
        Self { input, config }
    }

    pub(crate) fn build(self) -> Result<JournalSchedule, CalculationError> {
        let input = self.input;
        let movement = input.closing_value - input.opening_value;
        let key = PeriodKey::month_of(input.closing_date);

        // An increase is debited to stock on hand, a decrease to the movement
        // account. `LinePair` swaps the legs for negative movements.
        let description = if movement.is_sign_negative() {
            format!("Stock decrease: {}", input.description)
        } else {
            format!("Stock increase: {}", input.description)
        };
        let line_items = LinePair {
            id_prefix: line_id_prefix(&input.store, &key, "stock"),
            debit_account: &input.stock_account_code,
            credit_account: &input.movement_account_code,
            amount: movement,
            description: &description,
            store: &input.store,
            tax_rate: &self.config.tax_rate,
            date: input.closing_date,
        }
        .into_line_items();

        Ok(JournalSchedule {
            journal_type: JournalType::Stock,
            schedule_type: None,
            buckets: vec![PeriodBucket {
                key,
                label: input.closing_date.format("%B %Y").to_string(),
                description: input.description.clone(),
                period_start: month_start_date(input.closing_date),
                period_end: month_end_date(input.closing_date)?,
                days: 1,
                amount: movement,
                status: input.status.clone(),
                is_reversing_entry: false,
                running_unrecognized_balance: Decimal::ZERO,
                running_recognized_balance: movement,
                line_items,
            }],
        })
    }
}
