use async_trait::async_trait;

use crate::domain::GeneratedMetadata;

use super::GenerationRequest;

#[async_trait]
pub trait MetadataGenerator: Send + Sync {
    /// Issues one generation request against the backend with the given
    /// credential and returns the fully post-processed metadata triple.
    async fn generate(
        &self,
        credential: &str,
        request: &GenerationRequest,
    ) -> Result<GeneratedMetadata, GeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("backend returned {status}: {body}")]
    Http { status: u16, body: String },
    #[error("backend response contained no text")]
    EmptyResponse,
    #[error("metadata parse failed: {0}")]
    Parse(String),
}
