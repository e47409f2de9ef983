//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion provider (OpenAI-compatible HTTP client)
//! - HTTP front door (axum router, `/chat` controller, static frontend)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
