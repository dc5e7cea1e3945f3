use serde_json::Value;

use crate::application::ports::GeneratorError;
use crate::domain::{GeneratedMetadata, GenerationConfig};
use crate::infrastructure::text_processing::{build_keywords, normalize_title, truncate_chars};

/// The triple as parsed from the model response, before any
/// post-processing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawMetadata {
    pub title: String,
    pub keywords: String,
    pub description: String,
}

/// Pulls the JSON object out of free-form response text. Models wrap the
/// object in code fences or commentary often enough that this slices from
/// the first `{` to the last `}` after dropping fence markers.
pub fn extract_json_block(text: &str) -> Option<String> {
    let cleaned = text.replace("```json", "").replace("```", "");
    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end < start {
        return None;
    }
    Some(cleaned[start..=end].to_string())
}

/// Parses response text into a `RawMetadata`, tolerating a missing title
/// or description and accepting keywords as either an array of strings or
/// one comma-joined string.
pub fn parse_metadata_text(text: &str) -> Result<RawMetadata, GeneratorError> {
    let block = extract_json_block(text)
        .ok_or_else(|| GeneratorError::Parse("no JSON object found in response".to_string()))?;
    let value: Value =
        serde_json::from_str(&block).map_err(|e| GeneratorError::Parse(e.to_string()))?;

    Ok(RawMetadata {
        title: value
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        keywords: coerce_keywords(value.get("keywords")),
        description: value
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    })
}

fn coerce_keywords(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Deterministic post-processing of a parsed triple: title is normalized,
/// char-truncated, then wrapped with the enabled prefix/suffix; keywords
/// are rebuilt to the exact configured count; the description is raw text
/// truncated to its limit.
pub fn finalize_metadata(raw: &RawMetadata, config: &GenerationConfig) -> GeneratedMetadata {
    let mut title = truncate_chars(&normalize_title(&raw.title), config.title_length);

    if config.prefix_enabled {
        let prefix = config.prefix_text.trim();
        if !prefix.is_empty() {
            title = if title.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix} {title}")
            };
        }
    }
    if config.suffix_enabled {
        let suffix = config.suffix_text.trim();
        if !suffix.is_empty() {
            title = if title.is_empty() {
                suffix.to_string()
            } else {
                format!("{title} {suffix}")
            };
        }
    }

    let keywords = build_keywords(
        &raw.keywords,
        config.effective_bulk_text(),
        config.auto_remove_dup_keywords,
        config.keywords_count,
    );

    let description = truncate_chars(&raw.description, config.description_length);

    GeneratedMetadata {
        title,
        keywords,
        description,
    }
}
