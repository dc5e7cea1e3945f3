use async_trait::async_trait;

use crate::domain::SourceFile;

use super::PayloadPart;

#[async_trait]
pub trait AssetEncoder: Send + Sync {
    /// Converts an uploaded file into the content parts the backend
    /// expects. An empty part list means the request carries text only.
    async fn encode(&self, source: &SourceFile) -> Result<Vec<PayloadPart>, EncodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("rasterization failed: {0}")]
    Rasterize(String),
    #[error("source read failed: {0}")]
    Read(String),
}
