//! Scribus SLA documents.
//!
//! Parsing goes bytes → [`Element`] tree → typed schema, and writing goes
//! back the same way. Everything the schema does not model is carried
//! along untouched, so a load/save cycle changes only what the caller
//! changed.

pub mod attrs;
pub mod document;
pub mod element;
pub mod links;
pub mod mutate;
pub mod options;
pub mod schema;

#[cfg(test)]
mod tests;

pub use attrs::{AttributeGroup, Attributes};
pub use document::Document;
pub use element::Element;
pub use links::{LinkDirection, LinkIssue};
pub use options::{DuplicateOptions, ItemIdPolicy, LineBreakPolicy, LinkPolicy, Options, WriteOptions};
