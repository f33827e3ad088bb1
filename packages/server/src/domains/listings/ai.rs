//! Gemini implementation of the text-generation capability.

use async_trait::async_trait;
use gemini_client::GeminiClient;

use super::error::ListingError;
use super::generate::TextGenerator;

/// Text generation backed by the Gemini API.
#[derive(Clone)]
pub struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    /// Wrap a configured Gemini client.
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ListingError> {
        self.client
            .generate(prompt)
            .await
            .map_err(|e| ListingError::Generation(e.to_string()))
    }
}
