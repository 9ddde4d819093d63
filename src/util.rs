use crate::{
    config::CalculationConfig,
    domain::{
        logic::journal_calculator::JournalCalculator,
        usecases::calculate_usecase::{CalculateUsecase as _, CalculateUsecaseImpl},
    },
    entities::{
        JournalCalculation, JournalInput, JournalSchedule, RawJournalInput, StockJournalInput,
    },
    errors::{CalculationError, LoadError},
    presentation::hledger_printer::HledgerPrinter,
};

pub type Ledger = String;

pub struct JournalUtil {
    calculator: JournalCalculator,
    calculate_usecase: CalculateUsecaseImpl,
    printer: HledgerPrinter,
}

impl Default for JournalUtil {
    fn default() -> Self {
        Self::new(CalculationConfig::default())
    }
}

impl JournalUtil {
    pub fn new(config: CalculationConfig) -> Self {
        Self {
            printer: HledgerPrinter::new(config.decimal_places),
            calculate_usecase: CalculateUsecaseImpl::new(config.clone()),
            calculator: JournalCalculator::new(config),
        }
    }

    pub fn config(&self) -> &CalculationConfig {
        self.calculator.config()
    }

    /// Typed result, for callers that want to handle errors themselves.
    pub fn calculate(&self, input: &JournalInput) -> Result<JournalSchedule, CalculationError> {
        self.calculator.calculate(input)
    }

    /// Never fails: errors are returned in `JournalCalculation::error` with
    /// empty breakdowns.
    pub fn calculate_journal(&self, input: &JournalInput) -> JournalCalculation {
        self.calculator.calculate_journal(input)
    }

    pub fn calculate_raw(&self, input: RawJournalInput) -> JournalCalculation {
        self.calculator.calculate_raw(input)
    }

    pub fn calculate_stock(
        &self,
        input: &StockJournalInput,
    ) -> Result<JournalSchedule, CalculationError> {
        self.calculator.calculate_stock(input)
    }

    pub fn calculate_stock_journal(&self, input: &StockJournalInput) -> JournalCalculation {
        self.calculator.calculate_stock_journal(input)
    }

    pub async fn from_csv_string(
        &self,
        journals_csv: &str,
    ) -> Result<Vec<JournalCalculation>, LoadError> {
        self.calculate_usecase.from_string(journals_csv).await
    }

    pub async fn from_csv_file<T>(&self, journals_csv: T) -> Result<Vec<JournalCalculation>, LoadError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.calculate_usecase.from_file(journals_csv).await
    }

    pub fn print_ledger(&self, calculation: &JournalCalculation) -> Ledger {
        self.printer.print_ledger(calculation)
    }
}

/// Calculates a prepayment/accrual journal with the default configuration.
pub fn calculate_journal(input: &JournalInput) -> JournalCalculation {
    JournalCalculator::new(CalculationConfig::default()).calculate_journal(input)
}

/// Calculates a stock movement journal with the default configuration.
pub fn calculate_stock_journal(input: &StockJournalInput) -> JournalCalculation {
    JournalCalculator::new(CalculationConfig::default()).calculate_stock_journal(input)
}
