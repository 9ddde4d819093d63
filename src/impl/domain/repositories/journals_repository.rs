use async_trait::async_trait;

use crate::{entities::RawJournalInput, errors::LoadError};

#[async_trait]
pub trait JournalsRepository: Send + Sync {
    fn from_string(&self, journals_csv: &str) -> Result<Vec<RawJournalInput>, LoadError>;

    async fn from_file<P>(&self, journals_csv: P) -> Result<Vec<RawJournalInput>, LoadError>
    where
        P: AsRef<std::path::Path> + Send;
}
