use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{
    GenerationRequest, GeneratorError, MetadataGenerator, PayloadPart,
};
use crate::domain::{GeneratedMetadata, GenerationConfig, GenerationMode};
use crate::infrastructure::observability::sanitize_for_log;

use super::response::{finalize_metadata, parse_metadata_text};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(base_url: &str, model: &str) -> Self {
        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

/// The natural-language instruction sent ahead of the content parts.
pub fn build_instruction(file_name: &str, mime_type: &str, config: &GenerationConfig) -> String {
    let task = match config.mode {
        GenerationMode::Metadata => format!(
            "Generate stock-marketplace metadata for the {} platform.",
            config.platform
        ),
        GenerationMode::Prompt => format!(
            "Generate stock-marketplace metadata for the {} platform, where the \
             description is a detailed, ready-to-use image-generation prompt that \
             would recreate this asset.",
            config.platform
        ),
    };

    format!(
        "{task}\n\
         The asset is \"{file_name}\" ({mime_type}).\n\
         Constraints: the title must be at most {title} characters, there must be \
         exactly {keywords} keywords, and the description must be at most \
         {description} characters.\n\
         Return only a JSON object with keys \"title\" (string), \"keywords\" \
         (array of strings), \"description\" (string); no extra text.",
        title = config.title_length,
        keywords = config.keywords_count,
        description = config.description_length,
    )
}

fn part_to_json(part: &PayloadPart) -> serde_json::Value {
    match part {
        PayloadPart::InlineData { mime_type, data } => serde_json::json!({
            "inline_data": { "mime_type": mime_type, "data": data }
        }),
        PayloadPart::Text { text } => serde_json::json!({ "text": text }),
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[async_trait]
impl MetadataGenerator for GeminiClient {
    async fn generate(
        &self,
        credential: &str,
        request: &GenerationRequest,
    ) -> Result<GeneratedMetadata, GeneratorError> {
        let instruction = build_instruction(&request.file_name, &request.mime_type, &request.config);

        let mut parts = vec![serde_json::json!({ "text": instruction })];
        parts.extend(request.parts.iter().map(part_to_json));

        let body = serde_json::json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": 0.4
            }
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        // The credential travels in a header so it can never leak through
        // logged URLs or error bodies.
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", credential)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Request(sanitize_for_log(&e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Http {
                status,
                body: sanitize_for_log(&text),
            });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::Parse(format!("envelope decode failed: {e}")))?;

        let text: String = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }

        let raw = parse_metadata_text(&text)?;
        Ok(finalize_metadata(&raw, &request.config))
    }
}
