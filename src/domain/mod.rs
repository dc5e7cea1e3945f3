mod asset;
mod asset_status;
mod credential_set;
mod generated_metadata;
mod generation_config;

pub use asset::{mime_for_extension, Asset, AssetId, SourceFile};
pub use asset_status::AssetStatus;
pub use credential_set::{CredentialSet, MAX_CREDENTIALS};
pub use generated_metadata::GeneratedMetadata;
pub use generation_config::{GenerationConfig, GenerationMode, Platform};
