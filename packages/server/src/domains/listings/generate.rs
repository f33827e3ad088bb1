//! Listing generation orchestration.
//!
//! One submission is one isolated unit of work: validate, then either render
//! the deterministic templates or issue the three prompt calls and combine
//! the results. No state is shared across submissions.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::error::ListingError;
use super::extract;
use super::fallback;
use super::models::{GeneratedListings, PropertyRecord};
use super::prompts;

/// An opaque text-generation capability.
///
/// Implementations wrap a specific provider (Gemini in production, a
/// scripted mock in tests) and turn one free-form prompt into one free-form
/// response.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ListingError>;
}

/// Orchestrates one listing-generation request.
///
/// The generator handle is injected at construction; a service built
/// without one serves every request from the deterministic templates, so
/// the fallback path is testable without touching the environment.
#[derive(Clone)]
pub struct ListingService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl ListingService {
    /// Create a service backed by the given generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Create a service with no external capability.
    pub fn without_generator() -> Self {
        Self { generator: None }
    }

    /// Produce the three listing texts for one property record.
    ///
    /// Validation happens before any external call. The three prompt calls
    /// are independent and run concurrently; the combined result is returned
    /// only once all three complete. Any failed call fails the whole request
    /// with no partial result and no retry.
    pub async fn generate(
        &self,
        record: &PropertyRecord,
    ) -> Result<GeneratedListings, ListingError> {
        record.validate()?;

        let Some(generator) = &self.generator else {
            debug!(address = %record.address, "no generator configured, rendering deterministic templates");
            return Ok(fallback::render(record));
        };

        let prompts = prompts::build_prompts(record);

        let (mls, social_media, email_raw) = tokio::try_join!(
            generator.generate(&prompts.mls),
            generator.generate(&prompts.social_media),
            generator.generate(&prompts.email),
        )?;

        // MLS and social are used verbatim; the email response goes through
        // the lenient extraction chain and always yields a structured pair.
        let email = extract::parse_email(&email_raw, record).into_content();

        Ok(GeneratedListings {
            mls: mls.trim().to_string(),
            social_media: social_media.trim().to_string(),
            email,
        })
    }
}
