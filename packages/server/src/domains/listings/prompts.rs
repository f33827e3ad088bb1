//! Prompt templates for the three listing formats.
//!
//! All three prompts share one property-details block and differ only in
//! tone, length, and output-format instructions.

use super::format::{format_bathrooms, format_price, format_thousands};
use super::models::PropertyRecord;

/// Prompt for the professional MLS/Zillow description.
const MLS_PROMPT: &str = r#"Create a professional MLS/Zillow property listing description for this property:

{property}

Requirements:
- 150-200 words
- Professional, detailed, factual tone
- Paragraph style with key features highlighted
- Focus on value propositions and standout features
- Use real estate industry language
- No emojis or casual language"#;

/// Prompt for the social-media post.
const SOCIAL_PROMPT: &str = r#"Create a social media property listing post for this property:

{property}

Requirements:
- 80-120 words
- Exciting, engaging tone with relevant emojis
- Bullet point format
- Include relevant hashtags at the end
- Create urgency and excitement
- Use emojis strategically throughout"#;

/// Prompt for the email newsletter. Asks for JSON, but nothing guarantees
/// the model complies; see the extraction chain.
const EMAIL_PROMPT: &str = r#"Create an email newsletter property listing for this property:

{property}

Requirements:
- Generate both a compelling subject line and email body
- Subject line: Urgent, FOMO-inducing (under 50 characters)
- Email body: 100-150 words, personal tone, create urgency
- Format as JSON with "subject" and "body" fields
- Focus on scarcity and immediate action needed"#;

/// The three purpose-specific prompts derived from one record.
#[derive(Debug, Clone)]
pub struct ListingPrompts {
    pub mls: String,
    pub social_media: String,
    pub email: String,
}

/// Render the property-details block shared by all three prompts.
fn property_details(record: &PropertyRecord) -> String {
    let mut lines = vec![
        "Property Details:".to_string(),
        format!("- Address: {}", record.address),
        format!("- Price: ${}", format_price(record.price)),
        format!("- Bedrooms: {}", record.bedrooms),
        format!("- Bathrooms: {}", format_bathrooms(record.bathrooms)),
    ];
    if let Some(square_feet) = record.square_feet {
        lines.push(format!(
            "- Square Feet: {}",
            format_thousands(i64::from(square_feet))
        ));
    }
    if let Some(year_built) = record.year_built {
        lines.push(format!("- Year Built: {}", year_built));
    }
    if !record.special_features.is_empty() {
        lines.push(format!(
            "- Special Features: {}",
            record.special_features.join(", ")
        ));
    }
    lines.join("\n")
}

/// Build the three prompts for a record.
pub fn build_prompts(record: &PropertyRecord) -> ListingPrompts {
    let details = property_details(record);
    ListingPrompts {
        mls: MLS_PROMPT.replace("{property}", &details),
        social_media: SOCIAL_PROMPT.replace("{property}", &details),
        email: EMAIL_PROMPT.replace("{property}", &details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PropertyRecord {
        PropertyRecord {
            address: "1 Main St".to_string(),
            price: 500_000.0,
            bedrooms: 3,
            bathrooms: 2.5,
            square_feet: Some(1800),
            year_built: Some(2005),
            special_features: vec!["Pool/Spa".to_string(), "Garage".to_string()],
        }
    }

    #[test]
    fn test_property_details_includes_all_fields() {
        let details = property_details(&record());
        assert!(details.contains("- Address: 1 Main St"));
        assert!(details.contains("- Price: $500,000"));
        assert!(details.contains("- Bedrooms: 3"));
        assert!(details.contains("- Bathrooms: 2.5"));
        assert!(details.contains("- Square Feet: 1,800"));
        assert!(details.contains("- Year Built: 2005"));
        assert!(details.contains("- Special Features: Pool/Spa, Garage"));
    }

    #[test]
    fn test_property_details_omits_absent_fields() {
        let mut r = record();
        r.square_feet = None;
        r.year_built = None;
        r.special_features.clear();
        let details = property_details(&r);
        assert!(!details.contains("Square Feet"));
        assert!(!details.contains("Year Built"));
        assert!(!details.contains("Special Features"));
    }

    #[test]
    fn test_prompts_are_distinct_and_share_details() {
        let prompts = build_prompts(&record());
        for prompt in [&prompts.mls, &prompts.social_media, &prompts.email] {
            assert!(prompt.contains("1 Main St"));
            assert!(prompt.contains("$500,000"));
        }
        assert!(prompts.mls.contains("MLS/Zillow"));
        assert!(prompts.social_media.contains("social media"));
        assert!(prompts.email.contains("\"subject\" and \"body\""));
    }
}
