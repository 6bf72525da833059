//! Clipdrop API Library
//!
//! This crate provides the HTTP handlers, middleware, and application setup
//! for uploading videos and listing the most recent uploads.

mod api_doc;
pub mod constants;
mod handlers;
mod middleware;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
