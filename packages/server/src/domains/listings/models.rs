//! Property record and generated listing types.
//!
//! Wire format is camelCase to match the form client's JSON contract.

use serde::{Deserialize, Serialize};

use super::error::ListingError;

/// The fixed feature-tag catalog offered by the form.
///
/// Submitted `special_features` values are drawn from this list but are not
/// strictly validated against it.
pub const SPECIAL_FEATURES: &[&str] = &[
    "Updated Kitchen",
    "Hardwood Floors",
    "Great Schools",
    "Move-in Ready",
    "Open Floor Plan",
    "Private Backyard",
    "New Appliances",
    "Master Suite",
    "Garage",
    "Pool/Spa",
    "Fireplace",
    "Walk-in Closets",
];

/// One real-estate listing's attributes, immutable once submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub address: String,
    pub price: f64,
    pub bedrooms: u32,
    /// Half-steps allowed (2.5 bathrooms)
    pub bathrooms: f64,
    #[serde(default)]
    pub square_feet: Option<u32>,
    #[serde(default)]
    pub year_built: Option<i32>,
    /// Ordered; insertion order is preserved in all rendered output
    #[serde(default)]
    pub special_features: Vec<String>,
}

impl PropertyRecord {
    /// Check required fields. Must pass before any external call is made.
    pub fn validate(&self) -> Result<(), ListingError> {
        if self.address.trim().is_empty() || self.price <= 0.0 {
            return Err(ListingError::Validation(
                "Address and price are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// The three marketing texts derived from one property record.
///
/// The email artifact is always the normalized subject/body pair; consumers
/// never see a raw string shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedListings {
    pub mls: String,
    pub social_media: String,
    pub email: EmailContent,
}

/// Subject/body pair for the email artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}
