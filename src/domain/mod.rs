//! # Domain Layer
//!
//! Core models for the assistant: provider configuration, the fixed prompt,
//! and the answer type the gateway collapses to text.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
