use std::sync::Arc;

use crate::application::activity_log::ActivityLog;
use crate::application::ports::{GenerationRequest, GeneratorError, MetadataGenerator};
use crate::domain::{CredentialSet, GeneratedMetadata};

/// Tries configured credentials in order until one generation call
/// succeeds or all fail. Activity events reference credentials by their
/// 1-based ordinal only, never by value.
pub struct KeyRotation {
    generator: Arc<dyn MetadataGenerator>,
    activity: ActivityLog,
}

impl KeyRotation {
    pub fn new(generator: Arc<dyn MetadataGenerator>, activity: ActivityLog) -> Self {
        Self {
            generator,
            activity,
        }
    }

    pub async fn generate_with_rotation(
        &self,
        credentials: &CredentialSet,
        request: &GenerationRequest,
    ) -> Result<GeneratedMetadata, RotationError> {
        if credentials.is_empty() {
            return Err(RotationError::NoCredentialsConfigured);
        }

        let total = credentials.len();
        let mut last_error: Option<GeneratorError> = None;

        for (index, credential) in credentials.iter().enumerate() {
            let ordinal = index + 1;
            tracing::debug!(ordinal, total, file = %request.file_name, "Trying credential");

            match self.generator.generate(credential, request).await {
                Ok(metadata) => {
                    self.activity.push(format!(
                        "credential {ordinal}/{total} succeeded for {}",
                        request.file_name
                    ));
                    return Ok(metadata);
                }
                Err(e) => {
                    // Error messages are sanitized where they are built;
                    // only credential ordinals are ever named here.
                    self.activity.push(format!(
                        "credential {ordinal}/{total} failed for {}: {}",
                        request.file_name, e
                    ));
                    last_error = Some(e);
                }
            }
        }

        Err(RotationError::AllCredentialsExhausted {
            attempts: total,
            source: last_error.expect("at least one credential was attempted"),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RotationError {
    #[error("no credentials configured")]
    NoCredentialsConfigured,
    #[error("all {attempts} credentials failed: {source}")]
    AllCredentialsExhausted {
        attempts: usize,
        source: GeneratorError,
    },
}
