mod batch_orchestrator;
mod catalog;
mod key_rotation;

pub use batch_orchestrator::{BatchError, BatchOrchestrator, BatchOutcome};
pub use catalog::AssetCatalog;
pub use key_rotation::{KeyRotation, RotationError};
