//! scribus-sla - read, edit and write Scribus SLA documents
//!
//! SLA is the XML document format of the Scribus desktop-publishing
//! application. This library loads a document into typed structures,
//! offers editing operations on its page objects, and writes it back
//! without losing attributes or elements it does not understand.
//!
//! # Features
//!
//! - **Lossless round trip**: unknown attributes and elements are kept in
//!   place, attribute values are kept as the exact text Scribus wrote
//! - **Page-object editing**: duplicate, move, remove, replace text,
//!   replace image, rebuild bullet lists
//! - **Text chains**: inspect `NEXTITEM`/`BACKITEM` links for breakage
//! - **Explicit escaping**: choose how line breaks in attribute values are
//!   written
//!
//! # Example - Editing a flyer
//!
//! ```no_run
//! use scribus_sla::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = Document::load("flyer.sla")?;
//!
//! // Copy the headline frame and place the copy lower on the page
//! doc.duplicate_page_object(0)?;
//! doc.move_page_object(1, 100, 200)?;
//! doc.set_text(1, "Now with more pages")?;
//!
//! // Swap the photo
//! doc.set_image(2, "images/summer.jpg")?;
//!
//! for (index, object) in doc.page_objects().iter().enumerate() {
//!     println!("{}: {} {:?}", index, object.item_type(), object.text());
//! }
//!
//! doc.save("flyer-summer.sla")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing options from a config file
//!
//! ```no_run
//! use scribus_sla::{Document, Options};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = Options::from_yaml_str(&std::fs::read_to_string("sla.yaml")?)?;
//! let mut doc = Document::load("flyer.sla")?;
//! doc.duplicate_page_object_with(0, &options.duplicate)?;
//! doc.save_with("flyer-copy.sla", &options.write)?;
//! # Ok(())
//! # }
//! ```

/// Shared infrastructure: errors, escaping, encoding detection, identifiers
pub mod common;

/// The SLA document model and its editing operations
pub mod sla;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use sla::schema::{ItemType, PageObject, StoryItem, StoryText};
pub use sla::{
    Document, DuplicateOptions, ItemIdPolicy, LineBreakPolicy, LinkIssue, LinkPolicy, Options,
    WriteOptions,
};
