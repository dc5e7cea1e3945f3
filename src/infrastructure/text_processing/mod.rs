mod filler_vocabulary;
mod keyword_builder;
mod title_normalizer;

pub use filler_vocabulary::FILLER_TERMS;
pub use keyword_builder::{build_keywords, clean_keywords};
pub use title_normalizer::{normalize_title, truncate_chars};
