use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{CredentialStore, CredentialStoreError};
use crate::domain::CredentialSet;

#[derive(Default)]
pub struct MockCredentialStore {
    credentials: Mutex<CredentialSet>,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: CredentialSet) -> Self {
        Self {
            credentials: Mutex::new(credentials),
        }
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn load(&self) -> Result<CredentialSet, CredentialStoreError> {
        Ok(self
            .credentials
            .lock()
            .expect("mock store lock poisoned")
            .clone())
    }

    async fn save(&self, credentials: &CredentialSet) -> Result<(), CredentialStoreError> {
        *self
            .credentials
            .lock()
            .expect("mock store lock poisoned") = credentials.clone();
        Ok(())
    }
}
