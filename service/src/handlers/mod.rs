//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod events;

pub use events::user_updated;
