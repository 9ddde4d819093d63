use async_trait::async_trait;

use crate::{
    data::datasources::journals_csv_datasource::{
        JournalsCsvDatasource, JournalsCsvDatasourceImpl,
    },
    domain::repositories::journals_repository::JournalsRepository,
    entities::RawJournalInput,
    errors::LoadError,
};

pub(crate) struct JournalsRepositoryImpl<DS: JournalsCsvDatasource> {
    journals_datasource: DS,
}

#[async_trait]
impl<DS: JournalsCsvDatasource> JournalsRepository for JournalsRepositoryImpl<DS> {
    fn from_string(&self, journals_csv: &str) -> Result<Vec<RawJournalInput>, LoadError> {
        self.journals_datasource.from_string(journals_csv)
    }

    async fn from_file<P>(&self, journals_csv: P) -> Result<Vec<RawJournalInput>, LoadError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.journals_datasource.from_file(journals_csv).await
    }
}

impl JournalsRepositoryImpl<JournalsCsvDatasourceImpl> {
    pub(crate) fn new() -> Self {
        JournalsRepositoryImpl {
            journals_datasource: JournalsCsvDatasourceImpl::new(),
        }
    }
}
