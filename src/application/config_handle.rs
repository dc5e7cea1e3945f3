use std::sync::{Arc, RwLock};

use crate::domain::GenerationConfig;

/// Shared handle to the process-wide generation settings. The batch loop
/// reads `current` once at the start of each item; updates between items
/// take effect for the next item, never mid-item.
#[derive(Debug, Clone, Default)]
pub struct ConfigHandle {
    inner: Arc<RwLock<GenerationConfig>>,
}

impl ConfigHandle {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config.clamped())),
        }
    }

    pub fn current(&self) -> GenerationConfig {
        self.inner.read().expect("config lock poisoned").clone()
    }

    pub fn update(&self, apply: impl FnOnce(&mut GenerationConfig)) {
        let mut guard = self.inner.write().expect("config lock poisoned");
        apply(&mut guard);
        *guard = guard.clone().clamped();
    }
}
