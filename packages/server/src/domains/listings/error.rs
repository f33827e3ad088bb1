//! Typed errors for listing generation.

use thiserror::Error;

/// Errors that can occur while generating listing copy.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Required input fields missing or invalid. Raised before any external
    /// call and surfaced to the caller as a client error.
    #[error("{0}")]
    Validation(String),

    /// External generation call failed, timed out, or returned nothing
    /// usable. The caller sees a generic message; the detail is only logged.
    #[error("generation failed: {0}")]
    Generation(String),
}
