use stockmeta::domain::{GenerationConfig, GenerationMode, Platform};
use stockmeta::infrastructure::llm::{
    build_instruction, extract_json_block, finalize_metadata, parse_metadata_text, RawMetadata,
};

fn config() -> GenerationConfig {
    GenerationConfig {
        title_length: 40,
        keywords_count: 5,
        description_length: 60,
        ..GenerationConfig::default()
    }
}

#[test]
fn given_fenced_response_when_extracting_then_returns_inner_object() {
    let text = "```json\n{\"title\": \"A\"}\n```";
    assert_eq!(extract_json_block(text).as_deref(), Some("{\"title\": \"A\"}"));
}

#[test]
fn given_surrounding_commentary_when_extracting_then_slices_between_braces() {
    let text = "Sure! Here is your metadata: {\"title\": \"A\"} Hope that helps.";
    assert_eq!(extract_json_block(text).as_deref(), Some("{\"title\": \"A\"}"));
}

#[test]
fn given_no_object_when_extracting_then_returns_none() {
    assert!(extract_json_block("no json here").is_none());
}

#[test]
fn given_keyword_array_when_parsing_then_joins_with_commas() {
    let raw =
        parse_metadata_text(r#"{"title":"T","keywords":["a","b","c"],"description":"D"}"#).unwrap();
    assert_eq!(raw.keywords, "a, b, c");
    assert_eq!(raw.title, "T");
    assert_eq!(raw.description, "D");
}

#[test]
fn given_keyword_string_when_parsing_then_keeps_it_verbatim() {
    let raw = parse_metadata_text(r#"{"keywords":"a, b, c"}"#).unwrap();
    assert_eq!(raw.keywords, "a, b, c");
}

#[test]
fn given_missing_fields_when_parsing_then_defaults_to_empty_strings() {
    let raw = parse_metadata_text(r#"{"keywords":[]}"#).unwrap();
    assert_eq!(raw.title, "");
    assert_eq!(raw.keywords, "");
    assert_eq!(raw.description, "");
}

#[test]
fn given_malformed_json_when_parsing_then_fails_with_parse_error() {
    let err = parse_metadata_text("{not valid json").unwrap_err();
    assert!(err.to_string().contains("parse"), "unexpected error: {err}");
}

#[test]
fn given_long_fields_when_finalizing_then_truncates_to_configured_lengths() {
    let raw = RawMetadata {
        title: "word ".repeat(30),
        keywords: String::new(),
        description: "d".repeat(500),
    };
    let result = finalize_metadata(&raw, &config());
    assert!(result.title.chars().count() <= 40);
    assert_eq!(result.description.chars().count(), 60);
}

#[test]
fn given_enabled_prefix_and_suffix_when_finalizing_then_wraps_title_with_single_spaces() {
    let mut cfg = config();
    cfg.prefix_text = " Premium ".to_string();
    cfg.prefix_enabled = true;
    cfg.suffix_text = "Vector".to_string();
    cfg.suffix_enabled = true;

    let raw = RawMetadata {
        title: "mountain lake".to_string(),
        ..RawMetadata::default()
    };
    let result = finalize_metadata(&raw, &cfg);
    assert_eq!(result.title, "Premium Mountain lake Vector");
}

#[test]
fn given_disabled_prefix_when_finalizing_then_title_is_untouched() {
    let mut cfg = config();
    cfg.prefix_text = "Premium".to_string();
    cfg.prefix_enabled = false;

    let raw = RawMetadata {
        title: "mountain lake".to_string(),
        ..RawMetadata::default()
    };
    assert_eq!(finalize_metadata(&raw, &cfg).title, "Mountain lake");
}

#[test]
fn given_any_input_when_finalizing_then_keyword_count_is_exact() {
    let raw = RawMetadata {
        keywords: "a, b".to_string(),
        ..RawMetadata::default()
    };
    let result = finalize_metadata(&raw, &config());
    assert_eq!(result.keywords.split(", ").count(), 5);
}

#[test]
fn given_bulk_keywords_when_finalizing_then_they_lead_the_list() {
    let mut cfg = config();
    cfg.bulk_keyword_text = "brand, studio".to_string();
    cfg.bulk_keyword_enabled = true;

    let raw = RawMetadata {
        keywords: "sunset, ocean".to_string(),
        ..RawMetadata::default()
    };
    let result = finalize_metadata(&raw, &cfg);
    let list: Vec<&str> = result.keywords.split(", ").collect();
    assert_eq!(&list[..2], &["brand", "studio"]);
}

#[test]
fn given_metadata_mode_when_building_instruction_then_names_platform_and_limits() {
    let cfg = GenerationConfig {
        platform: Platform::Shutterstock,
        title_length: 70,
        keywords_count: 30,
        description_length: 120,
        ..GenerationConfig::default()
    };
    let instruction = build_instruction("beach.png", "image/png", &cfg);
    assert!(instruction.contains("shutterstock"));
    assert!(instruction.contains("beach.png"));
    assert!(instruction.contains("image/png"));
    assert!(instruction.contains("70"));
    assert!(instruction.contains("30"));
    assert!(instruction.contains("120"));
    assert!(instruction.contains("JSON object"));
}

#[test]
fn given_prompt_mode_when_building_instruction_then_asks_for_generation_prompt() {
    let cfg = GenerationConfig {
        mode: GenerationMode::Prompt,
        ..GenerationConfig::default()
    };
    let instruction = build_instruction("art.svg", "image/svg+xml", &cfg);
    assert!(instruction.contains("image-generation prompt"));
}
