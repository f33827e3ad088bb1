//! End-to-end tests for the listing generation endpoint.
//!
//! Drives the router directly with oneshot requests; no network, no real
//! Gemini credential.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use listing_core::domains::listings::{GeneratedListings, ListingService};
use listing_core::server::build_app;
use listing_core::testing::MockGenerator;
use serde_json::{json, Value};
use tower::ServiceExt;

fn record_json() -> Value {
    json!({
        "address": "1 Main St",
        "price": 500000,
        "bedrooms": 3,
        "bathrooms": 2,
        "squareFeet": 1800,
        "yearBuilt": 2005,
        "specialFeatures": ["Pool/Spa"]
    })
}

async fn post_record(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate-listings")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = build_app(Arc::new(ListingService::without_generator()));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn fallback_generation_without_credential() {
    let app = build_app(Arc::new(ListingService::without_generator()));
    let (status, body) = post_record(app, record_json()).await;

    assert_eq!(status, StatusCode::OK);
    let listings: GeneratedListings = serde_json::from_value(body).unwrap();
    assert!(listings.mls.contains("1 Main St"));
    assert!(listings.mls.contains("$500,000"));
    assert!(listings.mls.contains("pool/spa"));
    assert!(!listings.social_media.trim().is_empty());
    assert!(!listings.email.subject.trim().is_empty());
    assert!(!listings.email.body.trim().is_empty());
}

#[tokio::test]
async fn missing_address_is_a_client_error_with_no_calls() {
    let mock = MockGenerator::new();
    let app = build_app(Arc::new(ListingService::new(Arc::new(mock.clone()))));

    let mut body = record_json();
    body["address"] = json!("");
    let (status, response) = post_record(app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Address and price are required");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn non_positive_price_is_a_client_error_with_no_calls() {
    let mock = MockGenerator::new();
    let app = build_app(Arc::new(ListingService::new(Arc::new(mock.clone()))));

    let mut body = record_json();
    body["price"] = json!(0);
    let (status, response) = post_record(app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Address and price are required");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn generated_results_are_combined() {
    let mock = MockGenerator::new()
        .with_response("MLS/Zillow", "X")
        .with_response("social media", "Y")
        .with_response("email newsletter", r#"{"subject":"S","body":"B"}"#);
    let app = build_app(Arc::new(ListingService::new(Arc::new(mock.clone()))));

    let (status, body) = post_record(app, record_json()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mls"], "X");
    assert_eq!(body["socialMedia"], "Y");
    assert_eq!(body["email"]["subject"], "S");
    assert_eq!(body["email"]["body"], "B");
    assert_eq!(mock.call_count(), 3);
}

#[tokio::test]
async fn failed_generation_is_a_generic_server_error() {
    let mock = MockGenerator::new().with_failure("MLS/Zillow");
    let app = build_app(Arc::new(ListingService::new(Arc::new(mock))));

    let (status, body) = post_record(app, record_json()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate listings");
}

#[tokio::test]
async fn heuristic_email_extraction_end_to_end() {
    let mock = MockGenerator::new().with_response(
        "email newsletter",
        "Subject: Great Home\nBody:\nLine one.\nLine two.",
    );
    let app = build_app(Arc::new(ListingService::new(Arc::new(mock))));

    let (status, body) = post_record(app, record_json()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"]["subject"], "Great Home");
    assert_eq!(body["email"]["body"], "Line one.\nLine two.");
}
