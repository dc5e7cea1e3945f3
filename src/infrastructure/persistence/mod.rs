mod credential_file_store;
mod mock_credential_store;

pub use credential_file_store::{CredentialFileStore, STORAGE_KEY};
pub use mock_credential_store::MockCredentialStore;
