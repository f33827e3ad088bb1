//! Listing generation endpoint.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use tracing::error;

use crate::domains::listings::{GeneratedListings, ListingError, PropertyRecord};
use crate::server::app::AppState;

/// Error payload returned for failed requests.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate the three listing texts for a submitted property record.
///
/// Validation failures return the offending reason as a client error.
/// Generation failures return a generic message; the underlying detail is
/// logged internally and never exposed to the caller.
pub async fn generate_listings_handler(
    Extension(state): Extension<AppState>,
    Json(record): Json<PropertyRecord>,
) -> Result<Json<GeneratedListings>, (StatusCode, Json<ErrorResponse>)> {
    match state.listings.generate(&record).await {
        Ok(listings) => Ok(Json(listings)),
        Err(ListingError::Validation(reason)) => {
            Err((StatusCode::BAD_REQUEST, Json(ErrorResponse { error: reason })))
        }
        Err(err @ ListingError::Generation(_)) => {
            error!(error = %err, "Error generating listings");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to generate listings".to_string(),
                }),
            ))
        }
    }
}
