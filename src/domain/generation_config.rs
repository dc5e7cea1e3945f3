use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    Metadata,
    Prompt,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Metadata => "metadata",
            GenerationMode::Prompt => "prompt",
        }
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metadata" => Ok(GenerationMode::Metadata),
            "prompt" => Ok(GenerationMode::Prompt),
            _ => Err(format!("Invalid generation mode: {}", s)),
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Adobe,
    Freepik,
    Shutterstock,
    General,
    Vecteezy,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Adobe => "adobe",
            Platform::Freepik => "freepik",
            Platform::Shutterstock => "shutterstock",
            Platform::General => "general",
            Platform::Vecteezy => "vecteezy",
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adobe" => Ok(Platform::Adobe),
            "freepik" => Ok(Platform::Freepik),
            "shutterstock" => Ok(Platform::Shutterstock),
            "general" => Ok(Platform::General),
            "vecteezy" => Ok(Platform::Vecteezy),
            _ => Err(format!("Invalid platform: {}", s)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Process-wide generation tuning, read once per item at the moment its
/// generation starts. Numeric fields are clamped to the documented ranges
/// by `clamped`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub mode: GenerationMode,
    pub platform: Platform,
    pub title_length: usize,
    pub keywords_count: usize,
    pub description_length: usize,
    pub auto_remove_dup_keywords: bool,
    pub bulk_keyword_text: String,
    pub bulk_keyword_enabled: bool,
    pub prefix_text: String,
    pub prefix_enabled: bool,
    pub suffix_text: String,
    pub suffix_enabled: bool,
}

impl GenerationConfig {
    pub const TITLE_LENGTH_RANGE: (usize, usize) = (10, 120);
    pub const KEYWORDS_COUNT_RANGE: (usize, usize) = (5, 50);
    pub const DESCRIPTION_LENGTH_RANGE: (usize, usize) = (50, 200);

    pub fn clamped(mut self) -> Self {
        self.title_length = self
            .title_length
            .clamp(Self::TITLE_LENGTH_RANGE.0, Self::TITLE_LENGTH_RANGE.1);
        self.keywords_count = self
            .keywords_count
            .clamp(Self::KEYWORDS_COUNT_RANGE.0, Self::KEYWORDS_COUNT_RANGE.1);
        self.description_length = self.description_length.clamp(
            Self::DESCRIPTION_LENGTH_RANGE.0,
            Self::DESCRIPTION_LENGTH_RANGE.1,
        );
        self
    }

    /// The bulk keyword text that participates in generation, honoring the
    /// enable toggle.
    pub fn effective_bulk_text(&self) -> &str {
        if self.bulk_keyword_enabled {
            &self.bulk_keyword_text
        } else {
            ""
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Metadata,
            platform: Platform::Adobe,
            title_length: 80,
            keywords_count: 45,
            description_length: 150,
            auto_remove_dup_keywords: true,
            bulk_keyword_text: String::new(),
            bulk_keyword_enabled: false,
            prefix_text: String::new(),
            prefix_enabled: false,
            suffix_text: String::new(),
            suffix_enabled: false,
        }
    }
}
