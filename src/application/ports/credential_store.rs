use async_trait::async_trait;

use crate::domain::CredentialSet;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the persisted credential list; an absent store yields an
    /// empty set.
    async fn load(&self) -> Result<CredentialSet, CredentialStoreError>;

    /// Overwrites the persisted credential list wholesale.
    async fn save(&self, credentials: &CredentialSet) -> Result<(), CredentialStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialStoreError {
    #[error("storage io: {0}")]
    Io(String),
    #[error("storage format: {0}")]
    Format(String),
}
