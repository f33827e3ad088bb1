//! Testing utilities including mock implementations.
//!
//! Useful for exercising the orchestrator and routes without making real
//! Gemini calls.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domains::listings::{ListingError, TextGenerator};

/// A scripted text generator for tests.
///
/// Responses and failures are selected by substring match against the
/// prompt; every prompt is recorded so tests can assert call counts
/// (including zero).
#[derive(Clone, Default)]
pub struct MockGenerator {
    responses: Arc<RwLock<Vec<(String, String)>>>,
    failures: Arc<RwLock<Vec<String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockGenerator {
    /// Create a mock that answers every prompt with a placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response for any prompt containing `marker`.
    pub fn with_response(self, marker: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push((marker.into(), response.into()));
        self
    }

    /// Script a failure for any prompt containing `marker`.
    pub fn with_failure(self, marker: impl Into<String>) -> Self {
        self.failures.write().unwrap().push(marker.into());
        self
    }

    /// Prompts received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ListingError> {
        self.calls.write().unwrap().push(prompt.to_string());

        if self
            .failures
            .read()
            .unwrap()
            .iter()
            .any(|marker| prompt.contains(marker))
        {
            return Err(ListingError::Generation("mock generator failure".into()));
        }

        let scripted = self
            .responses
            .read()
            .unwrap()
            .iter()
            .find(|(marker, _)| prompt.contains(marker))
            .map(|(_, response)| response.clone());

        Ok(scripted.unwrap_or_else(|| "generated text".to_string()))
    }
}
