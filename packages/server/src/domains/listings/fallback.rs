//! Deterministic listing copy used when no Gemini credential is configured.
//!
//! Output is built by direct template substitution of the record's fields.
//! Feature lists keep their submitted order; currency is rendered with
//! thousands separators and no decimals.

use super::format::{format_bathrooms, format_price, format_thousands};
use super::models::{EmailContent, GeneratedListings, PropertyRecord};

/// Render all three listing texts without any external call.
pub fn render(record: &PropertyRecord) -> GeneratedListings {
    GeneratedListings {
        mls: render_mls(record),
        social_media: render_social(record),
        email: render_email(record),
    }
}

fn render_mls(record: &PropertyRecord) -> String {
    let square_feet = record
        .square_feet
        .map(|s| format!("{} square feet of ", format_thousands(i64::from(s))))
        .unwrap_or_default();
    let year_built = record
        .year_built
        .map(|y| format!(" built in {}", y))
        .unwrap_or_default();
    let features = if record.special_features.is_empty() {
        "modern amenities".to_string()
    } else {
        record.special_features.join(", ").to_lowercase()
    };
    format!(
        "Beautiful {} bedroom, {} bathroom home located at {}. \
         This stunning property offers {}comfortable living space{}. \
         Priced at ${}, this home features {}. \
         Perfect for families seeking quality and comfort in a desirable location. \
         Don't miss this opportunity to own a piece of paradise. \
         Schedule your viewing today and experience the charm and elegance this property has to offer.",
        record.bedrooms,
        format_bathrooms(record.bathrooms),
        record.address,
        square_feet,
        year_built,
        format_price(record.price),
        features,
    )
}

fn render_social(record: &PropertyRecord) -> String {
    format!(
        "🏠 JUST LISTED! 🏠\n\n\
         ✨ {}BR/{}BA Dream Home\n\
         💰 ${}\n\
         📍 {}\n\n\
         🔥 Features:\n{}\n\n\
         Don't wait - this beauty won't last! 🔥\n\n\
         #RealEstate #JustListed #DreamHome #PropertyForSale #NewListing",
        record.bedrooms,
        format_bathrooms(record.bathrooms),
        format_price(record.price),
        record.address,
        bullet_list(&record.special_features, 3),
    )
}

fn render_email(record: &PropertyRecord) -> EmailContent {
    EmailContent {
        subject: format!("🏠 URGENT: {}BR Home - Won't Last!", record.bedrooms),
        body: format!(
            "Hi there!\n\n\
             I wanted to reach out immediately about an incredible opportunity that just hit the market.\n\n\
             This stunning {} bedroom, {} bathroom home at {} is priced to move at ${}.\n\n\
             What makes this special:\n{}\n\n\
             Homes like this in this price range are selling within days. \
             I've already had 3 inquiries since this morning.\n\n\
             Can we schedule a viewing this week? I have availability tomorrow and Thursday.\n\n\
             Don't let this one slip away!\n\n\
             Best regards,\nYour Real Estate Agent",
            record.bedrooms,
            format_bathrooms(record.bathrooms),
            record.address,
            format_price(record.price),
            bullet_list(&record.special_features, 4),
        ),
    }
}

/// Bullet the first `max` features, preserving submitted order.
fn bullet_list(features: &[String], max: usize) -> String {
    features
        .iter()
        .take(max)
        .map(|f| format!("• {}", f))
        .collect::<Vec<_>>()
        .join("\n")
}
