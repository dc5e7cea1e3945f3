use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

/// Append-only activity feed observable by the caller. Every message is
/// mirrored to tracing; callers are responsible for sanitizing messages
/// before pushing (credential values must never reach this log).
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Arc<Mutex<Vec<ActivityEntry>>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(activity = %message);
        self.entries
            .lock()
            .expect("activity log lock poisoned")
            .push(ActivityEntry {
                at: Utc::now(),
                message,
            });
    }

    pub fn snapshot(&self) -> Vec<ActivityEntry> {
        self.entries
            .lock()
            .expect("activity log lock poisoned")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("activity log lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
