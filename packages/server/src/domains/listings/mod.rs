// Listing copy generation domain
pub mod ai;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod format;
pub mod generate;
pub mod models;
pub mod prompts;

pub use ai::GeminiGenerator;
pub use error::ListingError;
pub use extract::EmailParse;
pub use generate::{ListingService, TextGenerator};
pub use models::{EmailContent, GeneratedListings, PropertyRecord, SPECIAL_FEATURES};
