use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{GenerationRequest, GeneratorError, MetadataGenerator};
use crate::domain::GeneratedMetadata;

type OnCall = Box<dyn Fn(usize) + Send + Sync>;

/// Scripted stand-in for the backend client. Outcomes are consumed in
/// order; once the script runs dry every call succeeds with a fixed
/// triple. Records the credential of every call so rotation order can be
/// asserted.
pub struct MockMetadataGenerator {
    script: Mutex<VecDeque<Result<GeneratedMetadata, GeneratorError>>>,
    calls: Mutex<Vec<String>>,
    requests: Mutex<Vec<GenerationRequest>>,
    on_call: Option<OnCall>,
}

impl MockMetadataGenerator {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            on_call: None,
        }
    }

    /// Registers a hook invoked with the 0-based call index before the
    /// scripted outcome is returned.
    pub fn with_on_call(mut self, hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_call = Some(Box::new(hook));
        self
    }

    pub fn push_ok(&self, metadata: GeneratedMetadata) {
        self.script
            .lock()
            .expect("mock script lock poisoned")
            .push_back(Ok(metadata));
    }

    pub fn push_err(&self, error: GeneratorError) {
        self.script
            .lock()
            .expect("mock script lock poisoned")
            .push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock calls lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock calls lock poisoned").len()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .expect("mock requests lock poisoned")
            .clone()
    }

    fn default_metadata() -> GeneratedMetadata {
        GeneratedMetadata {
            title: "Mock title".to_string(),
            keywords: "mock, keywords".to_string(),
            description: "Mock description".to_string(),
        }
    }
}

impl Default for MockMetadataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataGenerator for MockMetadataGenerator {
    async fn generate(
        &self,
        credential: &str,
        request: &GenerationRequest,
    ) -> Result<GeneratedMetadata, GeneratorError> {
        let index = {
            let mut calls = self.calls.lock().expect("mock calls lock poisoned");
            calls.push(credential.to_string());
            calls.len() - 1
        };
        self.requests
            .lock()
            .expect("mock requests lock poisoned")
            .push(request.clone());

        if let Some(hook) = &self.on_call {
            hook(index);
        }

        self.script
            .lock()
            .expect("mock script lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(Self::default_metadata()))
    }
}
