mod asset_encoder;
mod credential_store;
mod metadata_generator;
mod payload;

pub use asset_encoder::{AssetEncoder, EncodeError};
pub use credential_store::{CredentialStore, CredentialStoreError};
pub use metadata_generator::{GeneratorError, MetadataGenerator};
pub use payload::{GenerationRequest, PayloadPart};
