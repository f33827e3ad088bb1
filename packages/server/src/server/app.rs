//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::listings::ListingService;
use crate::server::routes::{generate_listings_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub listings: Arc<ListingService>,
}

/// Build the Axum application router.
///
/// The listing service is passed in fully configured; whether it calls
/// Gemini or renders templates is decided once at startup, not per request.
pub fn build_app(listings: Arc<ListingService>) -> Router {
    let state = AppState { listings };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/generate-listings", post(generate_listings_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
