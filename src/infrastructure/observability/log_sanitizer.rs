const MAX_VISIBLE_LENGTH: usize = 200;

/// Sanitizes backend error text for safe logging: caps the length and
/// redacts credential-shaped substrings. Raw credential values must never
/// reach the activity log or tracing output.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let capped = if trimmed.chars().count() > MAX_VISIBLE_LENGTH {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{visible}... ({} chars total)", trimmed.chars().count())
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&capped)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("key=", "key=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
