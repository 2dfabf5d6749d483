//! Configuration for writing documents and duplicating page objects.
//!
//! All option structs have builder-style setters and deserialize from YAML,
//! so an embedding application can keep them in a configuration file.
//!
//! # Examples
//!
//! ```rust
//! use scribus_sla::{ItemIdPolicy, Options};
//!
//! let options = Options::from_yaml_str(
//!     "write:\n  indent: 2\nduplicate:\n  item_id: regenerate\n",
//! )
//! .unwrap();
//! assert_eq!(options.write.indent, 2);
//! assert_eq!(options.duplicate.item_id, ItemIdPolicy::Regenerate);
//! ```

use crate::common::{Error, Result};
pub use crate::common::xml::LineBreakPolicy;
use serde::{Deserialize, Serialize};

/// How serialization lays out and escapes the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Spaces per nesting level; `0` writes everything on one line
    pub indent: usize,
    /// How line breaks inside attribute values are written
    pub line_breaks: LineBreakPolicy,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            line_breaks: LineBreakPolicy::Literal,
        }
    }
}

impl WriteOptions {
    /// Create `WriteOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width.
    #[inline]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the line-break policy for attribute values.
    #[inline]
    pub fn with_line_breaks(mut self, policy: LineBreakPolicy) -> Self {
        self.line_breaks = policy;
        self
    }
}

/// What a duplicated page object does with its `ItemID`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemIdPolicy {
    /// The copy keeps the original identifier.
    #[default]
    Preserve,
    /// The copy gets a fresh identifier unique within the document.
    Regenerate,
}

/// What a duplicated page object does with its `NEXTITEM`/`BACKITEM` links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkPolicy {
    /// The copy keeps the original links.
    #[default]
    Preserve,
    /// The copy's links are reset to `-1`, leaving the copy outside any chain.
    Detach,
}

/// How [`Document::duplicate_page_object_with`](crate::Document::duplicate_page_object_with)
/// treats identity and links of the copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuplicateOptions {
    pub item_id: ItemIdPolicy,
    pub links: LinkPolicy,
}

impl DuplicateOptions {
    /// Create `DuplicateOptions` with default values (an exact copy).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier policy.
    #[inline]
    pub fn with_item_id(mut self, policy: ItemIdPolicy) -> Self {
        self.item_id = policy;
        self
    }

    /// Set the link policy.
    #[inline]
    pub fn with_links(mut self, policy: LinkPolicy) -> Self {
        self.links = policy;
        self
    }
}

/// All configurable behaviour in one place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub write: WriteOptions,
    pub duplicate: DuplicateOptions,
}

impl Options {
    /// Parse options from YAML. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.write.indent, 4);
        assert_eq!(options.write.line_breaks, LineBreakPolicy::Literal);
        assert_eq!(options.duplicate.item_id, ItemIdPolicy::Preserve);
        assert_eq!(options.duplicate.links, LinkPolicy::Preserve);
    }

    #[test]
    fn test_builders() {
        let write = WriteOptions::new()
            .with_indent(0)
            .with_line_breaks(LineBreakPolicy::CharRef);
        assert_eq!(write.indent, 0);
        assert_eq!(write.line_breaks, LineBreakPolicy::CharRef);

        let dup = DuplicateOptions::new()
            .with_item_id(ItemIdPolicy::Regenerate)
            .with_links(LinkPolicy::Detach);
        assert_eq!(dup.item_id, ItemIdPolicy::Regenerate);
        assert_eq!(dup.links, LinkPolicy::Detach);
    }

    #[test]
    fn test_from_yaml_partial() {
        let options = Options::from_yaml_str(
            "write:\n  line_breaks: char_ref\nduplicate:\n  links: detach\n",
        )
        .unwrap();
        assert_eq!(options.write.indent, 4);
        assert_eq!(options.write.line_breaks, LineBreakPolicy::CharRef);
        assert_eq!(options.duplicate.item_id, ItemIdPolicy::Preserve);
        assert_eq!(options.duplicate.links, LinkPolicy::Detach);
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = Options::from_yaml_str("duplicate:\n  item_id: sometimes\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
