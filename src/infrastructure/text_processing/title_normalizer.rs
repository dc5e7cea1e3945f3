use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static STRIPPED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[0-9#_=+*{}\[\];:<>/\\|~`"'.,!?()-]"#).unwrap());

/// Turns raw model output into a clean marketplace title: strips digits
/// and symbol characters, collapses whitespace, lowercases, removes
/// duplicate words keeping first occurrence, and uppercases only the
/// first character. Length truncation is the caller's concern.
pub fn normalize_title(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let stripped = STRIPPED_CHARS.replace_all(&normalized, "");
    let lowered = stripped.to_lowercase();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut words: Vec<&str> = Vec::new();
    for word in lowered.split_whitespace() {
        if seen.insert(word) {
            words.push(word);
        }
    }

    capitalize_first(&words.join(" "))
}

/// Character-prefix truncation, safe on multi-byte input.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
