use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};

use crate::application::ports::{AssetEncoder, EncodeError, PayloadPart};
use crate::domain::SourceFile;

use super::svg_rasterizer::rasterize_svg;

/// Characters of raw SVG source forwarded alongside the rasterized PNG.
pub const SVG_SOURCE_LIMIT: usize = 3000;

/// Converts uploads into backend content parts. Raster images pass
/// through base64-encoded as-is; SVGs are rasterized to PNG and their
/// source text is attached truncated; everything else yields no parts and
/// the backend receives the textual instruction only.
pub struct PayloadEncoder;

impl PayloadEncoder {
    pub fn new() -> Self {
        Self
    }

    async fn encode_svg(&self, source: &SourceFile) -> Result<Vec<PayloadPart>, EncodeError> {
        let data = source.bytes.to_vec();
        let png_bytes = tokio::task::spawn_blocking(move || {
            std::panic::catch_unwind(|| rasterize_svg(&data)).unwrap_or_else(|_| {
                Err(EncodeError::Rasterize(
                    "panic during SVG rasterization".to_string(),
                ))
            })
        })
        .await
        .map_err(|e| EncodeError::Rasterize(format!("task join error: {e}")))??;

        let source_text = String::from_utf8_lossy(&source.bytes);
        let truncated: String = source_text.chars().take(SVG_SOURCE_LIMIT).collect();

        Ok(vec![
            PayloadPart::InlineData {
                mime_type: "image/png".to_string(),
                data: general_purpose::STANDARD.encode(&png_bytes),
            },
            PayloadPart::Text {
                text: format!("Truncated SVG source:\n{truncated}"),
            },
        ])
    }
}

impl Default for PayloadEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetEncoder for PayloadEncoder {
    async fn encode(&self, source: &SourceFile) -> Result<Vec<PayloadPart>, EncodeError> {
        if source.is_raster() {
            return Ok(vec![PayloadPart::InlineData {
                mime_type: source.mime_type.clone(),
                data: general_purpose::STANDARD.encode(&source.bytes),
            }]);
        }

        if source.is_svg() {
            return self.encode_svg(source).await;
        }

        // Unrasterizable formats (.ai/.eps and friends) send no visual input.
        tracing::debug!(
            file = %source.file_name,
            mime = %source.mime_type,
            "No visual payload for this format"
        );
        Ok(Vec::new())
    }
}
