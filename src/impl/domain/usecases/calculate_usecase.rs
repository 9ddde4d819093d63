use async_trait::async_trait;
use tracing::debug;

use crate::{
    config::CalculationConfig,
    data::{
        datasources::journals_csv_datasource::JournalsCsvDatasourceImpl,
        repositories::journals_repository_impl::JournalsRepositoryImpl,
    },
    domain::{
        logic::journal_calculator::JournalCalculator,
        repositories::journals_repository::JournalsRepository,
    },
    entities::{JournalCalculation, RawJournalInput},
    errors::LoadError,
};

/// Loads a batch of journals and calculates each of them. A journal that
/// fails to calculate doesn't stop the batch; its result carries the error.
#[async_trait]
pub trait CalculateUsecase: Send + Sync {
    async fn from_string(&self, journals_csv: &str) -> Result<Vec<JournalCalculation>, LoadError>;

    async fn from_file<P>(&self, journals_csv: P) -> Result<Vec<JournalCalculation>, LoadError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct CalculateUsecaseImpl<
    R1 = JournalsRepositoryImpl<JournalsCsvDatasourceImpl>, // Default.
> where
    R1: JournalsRepository,
{
    journals_repository: R1,
    calculator: JournalCalculator,
}

#[async_trait]
impl<R1> CalculateUsecase for CalculateUsecaseImpl<R1>
where
    R1: JournalsRepository,
{
    async fn from_string(&self, journals_csv: &str) -> Result<Vec<JournalCalculation>, LoadError> {
        let journals = self.journals_repository.from_string(journals_csv)?;
        Ok(self.calculate_all(journals))
    }

    async fn from_file<P>(&self, journals_csv: P) -> Result<Vec<JournalCalculation>, LoadError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let journals = self.journals_repository.from_file(journals_csv).await?;
        Ok(self.calculate_all(journals))
    }
}

impl<R1: JournalsRepository> CalculateUsecaseImpl<R1> {
    fn calculate_all(&self, journals: Vec<RawJournalInput>) -> Vec<JournalCalculation> {
        debug!(journals = journals.len(), "calculating journal batch");
        journals
            .into_iter()
            .map(|raw| self.calculator.calculate_raw(raw))
            .collect()
    }
}

impl CalculateUsecaseImpl {
    pub(crate) fn new(config: CalculationConfig) -> Self {
        CalculateUsecaseImpl {
            journals_repository: JournalsRepositoryImpl::new(),
            calculator: JournalCalculator::new(config),
        }
    }
}
