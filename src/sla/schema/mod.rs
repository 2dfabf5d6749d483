//! Declared SLA schema.
//!
//! Each element the library models is either a flat attribute group
//! (declared with `attribute_group!`) or a small composite holding groups,
//! child lists and an `unknown` list for children it does not model.

pub mod document;
pub mod page_object;
pub mod pages;
pub mod settings;
pub mod story;
pub mod styles;

pub use document::{DocumentAttributes, DocumentContent};
pub use page_object::{ItemType, PageObject, PageObjectAttributes};
pub use pages::{NotesStyles, Page, PageName, PageSet, PageSetAttributes, PageSets, Section, Sections};
pub use settings::{CheckProfile, Color, Layer, Lpi, Pdf, PdfAttributes, Printer};
pub use story::{DefaultStyle, ParagraphFormat, StoryItem, StoryText, TextRun};
pub use styles::{
    CellStyle, CellStyleAttributes, CharacterStyle, NotesStyle, ParagraphStyle, TableBorder,
    TableBorderLine, TableBorders, TableStyle, TableStyleAttributes,
};
