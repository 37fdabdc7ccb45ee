//! Clipstore API Library
//!
//! HTTP surface and orchestration for the upload coordination service:
//! handlers, the two use-case services, application state, and setup.

mod api_doc;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod test_helpers;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
