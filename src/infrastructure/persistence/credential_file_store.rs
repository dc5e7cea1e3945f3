use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::application::ports::{CredentialStore, CredentialStoreError};
use crate::domain::CredentialSet;

/// Namespaced key the credential list lives under inside the settings
/// file.
pub const STORAGE_KEY: &str = "stockmeta.credentials";

/// Key-value settings file on disk. Credentials are one JSON array under
/// `STORAGE_KEY`; other keys in the file are left untouched on save.
pub struct CredentialFileStore {
    path: PathBuf,
}

impl CredentialFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Conventional location under the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stockmeta").join("settings.json"))
    }

    async fn read_map(&self) -> Result<Map<String, Value>, CredentialStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(CredentialStoreError::Io(e.to_string())),
        };

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| CredentialStoreError::Format(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(map),
            other => Err(CredentialStoreError::Format(format!(
                "expected a JSON object at the top level, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl CredentialStore for CredentialFileStore {
    async fn load(&self) -> Result<CredentialSet, CredentialStoreError> {
        let map = self.read_map().await?;

        let values: Vec<String> = match map.get(STORAGE_KEY) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(other) => {
                return Err(CredentialStoreError::Format(format!(
                    "expected a JSON array under {STORAGE_KEY}, found {}",
                    json_type_name(other)
                )))
            }
            None => Vec::new(),
        };

        Ok(CredentialSet::from_values(values))
    }

    async fn save(&self, credentials: &CredentialSet) -> Result<(), CredentialStoreError> {
        // A corrupt settings file is replaced rather than surfaced here;
        // unrelated keys survive only when the file parses.
        let mut map = self.read_map().await.unwrap_or_default();

        map.insert(
            STORAGE_KEY.to_string(),
            Value::Array(
                credentials
                    .iter()
                    .map(|c| Value::String(c.to_string()))
                    .collect(),
            ),
        );

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CredentialStoreError::Io(e.to_string()))?;
        }

        let bytes = serde_json::to_vec_pretty(&Value::Object(map))
            .map_err(|e| CredentialStoreError::Format(e.to_string()))?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| CredentialStoreError::Io(e.to_string()))
    }
}
