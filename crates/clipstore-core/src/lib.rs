//! Clipstore Core Library
//!
//! Shared domain models, configuration, and error types for the upload
//! coordination service. The `Video` entity and the request/response types it
//! travels in live here; persistence and storage concerns live in their own
//! crates.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
