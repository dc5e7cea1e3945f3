use std::fmt;

pub const MAX_CREDENTIALS: usize = 5;

/// Ordered list of up to `MAX_CREDENTIALS` API credentials. Construction
/// sanitizes: values are trimmed, blanks dropped, overflow truncated.
/// `Debug` never prints the values themselves.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CredentialSet {
    values: Vec<String>,
}

impl CredentialSet {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sanitized: Vec<String> = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();
        sanitized.truncate(MAX_CREDENTIALS);
        Self { values: sanitized }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CredentialSet({} credentials)", self.values.len())
    }
}
