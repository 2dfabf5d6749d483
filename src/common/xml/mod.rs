//! XML text helpers shared by the reader and the writer.

mod escape;

pub use escape::{LineBreakPolicy, escape_attr, escape_text, unescape};
pub(crate) use escape::resolve_reference;
