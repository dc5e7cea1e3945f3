use std::collections::HashSet;

use super::filler_vocabulary::FILLER_TERMS;

/// Normalizes a raw keyword blob into a `", "`-joined list: lowercased,
/// split on commas/semicolons/newlines, each token reduced to its first
/// word, empties dropped, optionally deduplicated keeping first
/// occurrence. `extra` is appended comma-joined when non-blank.
pub fn clean_keywords(raw: &str, dedupe: bool, extra: &str) -> String {
    clean_keyword_list(raw, dedupe, extra).join(", ")
}

/// Builds the final keyword string for one asset: cleans base + bulk
/// together, moves the (deduplicated) bulk tokens to the front in their
/// own order, pads from the filler vocabulary skipping terms already
/// present, and truncates to exactly `target_count` entries.
pub fn build_keywords(
    base_keywords: &str,
    bulk_text: &str,
    dedupe: bool,
    target_count: usize,
) -> String {
    let combined = clean_keyword_list(base_keywords, dedupe, bulk_text);
    let bulk_tokens = clean_keyword_list(bulk_text, true, "");

    let mut ordered: Vec<String> = if bulk_tokens.is_empty() {
        combined
    } else {
        let bulk_set: HashSet<&str> = bulk_tokens.iter().map(String::as_str).collect();
        let mut reordered = bulk_tokens.clone();
        reordered.extend(
            combined
                .into_iter()
                .filter(|token| !bulk_set.contains(token.as_str())),
        );
        reordered
    };

    if ordered.len() < target_count {
        let mut present: HashSet<String> = ordered.iter().cloned().collect();
        for term in FILLER_TERMS {
            if ordered.len() >= target_count {
                break;
            }
            if present.insert((*term).to_string()) {
                ordered.push((*term).to_string());
            }
        }
    }

    ordered.truncate(target_count);
    ordered.join(", ")
}

fn clean_keyword_list(raw: &str, dedupe: bool, extra: &str) -> Vec<String> {
    let combined = if extra.trim().is_empty() {
        raw.to_string()
    } else {
        format!("{raw}, {extra}")
    };
    let lowered = combined.to_lowercase();

    let mut seen: HashSet<String> = HashSet::new();
    let mut tokens: Vec<String> = Vec::new();

    for piece in lowered.split([',', ';', '\n']) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        // Multi-word phrases reduce to their first word.
        let Some(word) = piece.split_whitespace().next() else {
            continue;
        };
        if dedupe {
            if seen.insert(word.to_string()) {
                tokens.push(word.to_string());
            }
        } else {
            tokens.push(word.to_string());
        }
    }

    tokens
}
