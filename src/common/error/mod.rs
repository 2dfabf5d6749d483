//! Unified error types for scribus-sla.
//!
//! This module provides a single error type covering the filesystem boundary,
//! markup parsing and serialization, and page-object mutation.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
