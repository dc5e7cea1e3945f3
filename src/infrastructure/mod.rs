pub mod encoding;
pub mod export;
pub mod llm;
pub mod observability;
pub mod persistence;
pub mod preview;
pub mod text_processing;
