use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::activity_log::ActivityLog;
use crate::application::cancel_flag::CancelFlag;
use crate::application::config_handle::ConfigHandle;
use crate::application::ports::{AssetEncoder, EncodeError, GenerationRequest};
use crate::application::services::key_rotation::{KeyRotation, RotationError};
use crate::domain::{AssetId, CredentialSet, GeneratedMetadata, GenerationConfig, SourceFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    pub success_count: usize,
    pub failed_count: usize,
    pub stopped: bool,
}

/// Drives per-item state transitions across the catalog, strictly
/// sequentially. One orchestrator serializes all generation work: a batch
/// run and a single regenerate share the same single-flight guard.
pub struct BatchOrchestrator {
    encoder: Arc<dyn AssetEncoder>,
    rotation: KeyRotation,
    activity: ActivityLog,
    cancel: CancelFlag,
    running: Arc<AtomicBool>,
}

impl BatchOrchestrator {
    pub fn new(encoder: Arc<dyn AssetEncoder>, rotation: KeyRotation, activity: ActivityLog) -> Self {
        Self {
            encoder,
            rotation,
            activity,
            cancel: CancelFlag::new(),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Requests a cooperative stop. The in-flight item always completes;
    /// no new item starts afterwards.
    pub fn stop(&self) {
        self.cancel.request_stop();
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Runs one batch over every item that is `Pending` or `Failed` at
    /// call time. Items added after this snapshot are not part of the run.
    pub async fn run(
        &self,
        catalog: &Mutex<super::AssetCatalog>,
        credentials: &CredentialSet,
        config: &ConfigHandle,
    ) -> Result<BatchOutcome, BatchError> {
        if credentials.is_empty() {
            return Err(BatchError::NoCredentialsConfigured);
        }
        let _guard = RunGuard::acquire(&self.running)?;
        self.cancel.reset();

        let queue: Vec<AssetId> = catalog.lock().await.batch_candidates();
        self.activity
            .push(format!("batch started: {} item(s) queued", queue.len()));

        let mut outcome = BatchOutcome::default();

        for id in queue {
            if self.cancel.is_cancelled() {
                outcome.stopped = true;
                self.activity.push("batch stopped by user");
                break;
            }

            let snapshot = config.current();

            let Some(source) = catalog.lock().await.begin_generation(id) else {
                // Removed since the snapshot, or already generating.
                continue;
            };

            match self.generate_one(&source, credentials, snapshot).await {
                Ok(metadata) => {
                    catalog.lock().await.commit_success(id, metadata);
                    outcome.success_count += 1;
                    self.activity
                        .push(format!("generated metadata for {}", source.file_name));
                }
                Err(e) => {
                    let message = e.to_string();
                    catalog.lock().await.commit_failure(id, message.clone());
                    outcome.failed_count += 1;
                    self.activity
                        .push(format!("generation failed for {}: {message}", source.file_name));
                }
            }
        }

        self.cancel.reset();
        self.activity.push(format!(
            "batch finished: {} succeeded, {} failed{}",
            outcome.success_count,
            outcome.failed_count,
            if outcome.stopped { " (stopped)" } else { "" }
        ));

        Ok(outcome)
    }

    /// Re-runs generation for one item, regardless of whether it already
    /// succeeded. Shares the batch single-flight guard so only one
    /// generation is ever in flight.
    pub async fn regenerate(
        &self,
        catalog: &Mutex<super::AssetCatalog>,
        id: AssetId,
        credentials: &CredentialSet,
        config: &ConfigHandle,
    ) -> Result<(), BatchError> {
        if credentials.is_empty() {
            return Err(BatchError::NoCredentialsConfigured);
        }
        let _guard = RunGuard::acquire(&self.running)?;

        let snapshot = config.current();

        let source = {
            let mut cat = catalog.lock().await;
            if cat.get(id).is_none() {
                return Err(BatchError::UnknownAsset);
            }
            cat.begin_generation(id)
                .ok_or(BatchError::GenerationInFlight)?
        };

        match self.generate_one(&source, credentials, snapshot).await {
            Ok(metadata) => {
                catalog.lock().await.commit_success(id, metadata);
                self.activity
                    .push(format!("regenerated metadata for {}", source.file_name));
            }
            Err(e) => {
                let message = e.to_string();
                catalog.lock().await.commit_failure(id, message.clone());
                self.activity
                    .push(format!("regeneration failed for {}: {message}", source.file_name));
            }
        }

        Ok(())
    }

    async fn generate_one(
        &self,
        source: &SourceFile,
        credentials: &CredentialSet,
        config: GenerationConfig,
    ) -> Result<GeneratedMetadata, BatchItemError> {
        let parts = self
            .encoder
            .encode(source)
            .await
            .map_err(BatchItemError::Encoding)?;

        let request = GenerationRequest {
            file_name: source.file_name.clone(),
            mime_type: source.mime_type.clone(),
            parts,
            config,
        };

        self.rotation
            .generate_with_rotation(credentials, &request)
            .await
            .map_err(BatchItemError::Generation)
    }
}

/// Clears the running flag on every exit path, including early returns.
struct RunGuard<'a> {
    running: &'a AtomicBool,
}

impl<'a> RunGuard<'a> {
    fn acquire(running: &'a AtomicBool) -> Result<Self, BatchError> {
        if running.swap(true, Ordering::SeqCst) {
            return Err(BatchError::AlreadyRunning);
        }
        Ok(Self { running })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("no credentials configured")]
    NoCredentialsConfigured,
    #[error("a generation run is already active")]
    AlreadyRunning,
    #[error("unknown asset")]
    UnknownAsset,
    #[error("a generation is already in flight for this asset")]
    GenerationInFlight,
}

/// Per-item failure, caught at the item boundary; one failing item never
/// aborts the batch loop.
#[derive(Debug, thiserror::Error)]
enum BatchItemError {
    #[error("encoding: {0}")]
    Encoding(EncodeError),
    #[error("generation: {0}")]
    Generation(RotationError),
}
