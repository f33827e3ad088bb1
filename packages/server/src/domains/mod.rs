// Domain modules
pub mod listings;
