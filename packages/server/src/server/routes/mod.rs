// HTTP routes
pub mod health;
pub mod listings;

pub use health::*;
pub use listings::*;
