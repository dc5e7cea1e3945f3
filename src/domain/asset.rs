use bytes::Bytes;
use uuid::Uuid;

use super::AssetStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(Uuid);

impl AssetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::new()
    }
}

/// The original uploaded bytes plus the identity they arrived with.
/// Owned exclusively by one `Asset` and never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl SourceFile {
    pub fn new(file_name: String, mime_type: String, bytes: Bytes) -> Self {
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    pub fn is_raster(&self) -> bool {
        matches!(
            self.mime_type.as_str(),
            "image/png" | "image/jpeg" | "image/jpg" | "image/webp" | "image/gif"
        )
    }

    pub fn is_svg(&self) -> bool {
        self.mime_type == "image/svg+xml" || self.extension().as_deref() == Some("svg")
    }
}

/// Maps a file extension to the MIME type used throughout the pipeline.
/// Unknown extensions fall back to `application/octet-stream`; the encoder
/// sends no visual input for those.
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ai" => "application/postscript",
        "eps" => "application/postscript",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: AssetId,
    pub source: SourceFile,
    pub title: String,
    pub keywords: String,
    pub description: String,
    pub status: AssetStatus,
    pub error: Option<String>,
    /// Thumbnail PNG held for the item's lifetime; dropped with the item.
    pub preview: Option<Bytes>,
}

impl Asset {
    pub fn new(source: SourceFile, preview: Option<Bytes>) -> Self {
        Self {
            id: AssetId::new(),
            source,
            title: String::new(),
            keywords: String::new(),
            description: String::new(),
            status: AssetStatus::Pending,
            error: None,
            preview,
        }
    }
}
