mod gemini_client;
mod mock_generator;
mod response;

pub use gemini_client::{build_instruction, GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock_generator::MockMetadataGenerator;
pub use response::{extract_json_block, finalize_metadata, parse_metadata_text, RawMetadata};
