//! Unified error types for scribus-sla.
//!
//! Every fallible operation in the crate returns [`Result`], whether it
//! touches the filesystem, the markup parser, or a page object.
use thiserror::Error;

/// Main error type for SLA operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading or writing a document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not a well-formed SLA document
    #[error("Parse error: {0}")]
    Parse(String),

    /// In-memory document could not be rendered as markup
    #[error("Serialize error: {0}")]
    Serialize(String),

    /// Mutation requested on a page object of the wrong kind
    #[error("Page object {index} is a {found}, expected a {expected}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: String,
    },

    /// Page-object index outside `[0, len)`
    #[error("Page object index {index} out of range (length: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Text frame has no text run to replace
    #[error("Text frame {index} has no text run")]
    EmptyStory { index: usize },

    /// Caller-supplied value cannot be written into the document
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid configuration input
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for a [`Error::Parse`] built from anything printable.
    pub(crate) fn parse(msg: impl std::fmt::Display) -> Self {
        Error::Parse(msg.to_string())
    }

    /// Shorthand for a [`Error::Serialize`] built from anything printable.
    pub(crate) fn serialize(msg: impl std::fmt::Display) -> Self {
        Error::Serialize(msg.to_string())
    }
}

/// Result type for SLA operations.
pub type Result<T> = std::result::Result<T, Error>;
