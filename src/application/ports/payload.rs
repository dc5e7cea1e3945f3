use crate::domain::GenerationConfig;

/// One content part of the backend request body, alongside the textual
/// instruction. Raster uploads contribute a single inline-binary part;
/// vector uploads contribute a rasterized PNG part plus a truncated
/// source-text part; anything else contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadPart {
    InlineData { mime_type: String, data: String },
    Text { text: String },
}

/// Everything one generation attempt needs besides the credential. Built
/// once per item and reused across credential rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub file_name: String,
    pub mime_type: String,
    pub parts: Vec<PayloadPart>,
    pub config: GenerationConfig,
}
