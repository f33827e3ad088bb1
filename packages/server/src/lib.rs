// Propcopy - API Core
//
// This crate provides the backend API for turning one structured property
// record into three pieces of marketing copy (MLS description, social post,
// email subject/body). Generation goes through the Gemini API when a
// credential is configured and falls back to deterministic templates when
// it is not.

pub mod config;
pub mod domains;
pub mod server;
pub mod testing;

pub use config::*;
