use tracing::debug;

use crate::{
    config::CalculationConfig,
    data::models::journal_input_model::JournalInputModel,
    entities::{
        JournalCalculation, JournalInput, JournalSchedule, RawJournalInput, StockJournalInput,
    },
    errors::CalculationError,
};

use super::{
    journal_builder::JournalBuilder, multi_store_combiner::MultiStoreCombiner,
    stock_journal_builder::StockJournalBuilder,
};

/// Entry point of the engine: routes each journal to the right builder.
/// Stateless apart from its configuration, so one instance can serve any
/// number of calculations.
pub(crate) struct JournalCalculator {
    config: CalculationConfig,
}

impl JournalCalculator {
    pub(crate) fn new(config: CalculationConfig) -> Self {
        Self { config }
    }

    pub(crate) fn config(&self) -> &CalculationConfig {
        &self.config
    }

    pub(crate) fn calculate(&self, input: &JournalInput) -> Result<JournalSchedule, CalculationError> {
        if input.store_allocations.is_empty() {
            JournalBuilder::new(input, &self.config).build()
        } else {
            debug!(
                allocations = input.store_allocations.len(),
                "routing journal to multi-store combiner"
            );
            MultiStoreCombiner::new(input, &self.config).build()
        }
    }

    pub(crate) fn calculate_journal(&self, input: &JournalInput) -> JournalCalculation {
        self.calculate(input).into()
    }

    /// Converts boundary input first; conversion errors are reported the same
    /// way as calculation errors.
    pub(crate) fn calculate_raw(&self, raw: RawJournalInput) -> JournalCalculation {
        JournalInputModel(raw)
            .into_journal_input(self.config.invalid_allocation_policy)
            .and_then(|input| self.calculate(&input))
            .into()
    }

    pub(crate) fn calculate_stock(
        &self,
        input: &StockJournalInput,
    ) -> Result<JournalSchedule, CalculationError> {
        StockJournalBuilder::new(input, &self.config).build()
    }

    pub(crate) fn calculate_stock_journal(&self, input: &StockJournalInput) -> JournalCalculation {
        self.calculate_stock(input).into()
    }
}
