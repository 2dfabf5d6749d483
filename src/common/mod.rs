//! Common types and utilities shared across the crate.
//!
//! Error handling, the escaping policy, encoding detection and identifier
//! generation live here; nothing in this module knows the SLA schema.

// Submodule declarations
pub mod bom;
pub mod error;
pub mod id;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
