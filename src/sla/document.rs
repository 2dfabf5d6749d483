//! The SLA document root and its load/save contract.

use std::fs;
use std::path::Path;

use log::debug;

use super::attrs::Attributes;
use super::element::Element;
use super::options::WriteOptions;
use super::schema::{
    CharacterStyle, Color, DocumentContent, Layer, Page, PageObject, ParagraphStyle,
};
use crate::common::{Error, Result};

/// A Scribus SLA document.
///
/// The whole file is held in memory. Load it, change it through the
/// page-object operations or the schema types, then save it.
///
/// # Examples
///
/// ```no_run
/// use scribus_sla::Document;
///
/// # fn main() -> scribus_sla::Result<()> {
/// let mut doc = Document::load("flyer.sla")?;
/// doc.duplicate_page_object(0)?;
/// doc.move_page_object(1, 100, 200)?;
/// doc.save("flyer-edited.sla")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// `Version` attribute of the root element
    version: Option<String>,
    /// Other root attributes
    root_extra: Attributes,
    content: DocumentContent,
    /// Root children other than `DOCUMENT`
    unknown: Vec<Element>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Root element name.
    pub const ROOT_TAG: &'static str = "SCRIBUSUTF8NEW";
    /// Format version stamped on new documents.
    pub const DEFAULT_VERSION: &'static str = "1.5.8";

    /// Create a blank document.
    ///
    /// # Examples
    ///
    /// ```
    /// use scribus_sla::Document;
    ///
    /// let doc = Document::new();
    /// assert_eq!(doc.version(), Some("1.5.8"));
    /// assert!(doc.page_objects().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            version: Some(Self::DEFAULT_VERSION.to_string()),
            root_extra: Attributes::new(),
            content: DocumentContent::default(),
            unknown: Vec::new(),
        }
    }

    /// Read and parse a document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let doc = Self::from_bytes(&bytes)?;
        debug!(
            "Loaded {} ({} bytes, {} page objects)",
            path.display(),
            bytes.len(),
            doc.content.page_objects.len()
        );
        Ok(doc)
    }

    /// Parse a document from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let root = Element::parse(bytes)?;
        if root.name() != Self::ROOT_TAG {
            return Err(Error::Parse(format!(
                "unexpected root element <{}>, expected <{}>",
                root.name(),
                Self::ROOT_TAG
            )));
        }

        let (_, mut root_extra, children) = root.into_parts();
        let version = root_extra.shift_remove("Version");
        let mut content = None;
        let mut unknown = Vec::new();
        for child in children {
            if child.name() == DocumentContent::TAG && content.is_none() {
                content = Some(DocumentContent::from_element(child));
            } else {
                unknown.push(child);
            }
        }
        let content = content.ok_or_else(|| {
            Error::parse(format_args!(
                "<{}> has no <{}> element",
                Self::ROOT_TAG,
                DocumentContent::TAG
            ))
        })?;

        Ok(Self {
            version,
            root_extra,
            content,
            unknown,
        })
    }

    /// Serialize the document.
    pub fn to_bytes(&self, options: &WriteOptions) -> Result<Vec<u8>> {
        self.to_element().to_document_bytes(options)
    }

    /// Write the document to `path` with default options.
    ///
    /// The file is overwritten in place; a failure part way through can
    /// leave it truncated.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.save_with(path, &WriteOptions::default())
    }

    /// Write the document to `path` with the given options.
    pub fn save_with<P: AsRef<Path>>(&self, path: P, options: &WriteOptions) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes(options)?;
        fs::write(path, &bytes)?;
        debug!(
            "Saved {} ({} bytes, {} page objects)",
            path.display(),
            bytes.len(),
            self.content.page_objects.len()
        );
        Ok(())
    }

    fn to_element(&self) -> Element {
        let mut attributes = Attributes::with_capacity(self.root_extra.len() + 1);
        if let Some(version) = &self.version {
            attributes.insert("Version".to_string(), version.clone());
        }
        attributes.extend(self.root_extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut root = Element::with_attributes(Self::ROOT_TAG, attributes);
        root.add_child(self.content.to_element());
        root.children_mut().extend(self.unknown.iter().cloned());
        root
    }

    /// Format version of the file.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Set the format version.
    pub fn set_version(&mut self, version: &str) {
        self.version = Some(version.to_string());
    }

    /// Document settings, styles, pages and page objects.
    pub fn content(&self) -> &DocumentContent {
        &self.content
    }

    /// Mutable access to the document content.
    ///
    /// Changes made here bypass the checks of the page-object operations.
    pub fn content_mut(&mut self) -> &mut DocumentContent {
        &mut self.content
    }

    /// Page objects in document order.
    pub fn page_objects(&self) -> &[PageObject] {
        &self.content.page_objects
    }

    /// The page object at `index`.
    pub fn page_object(&self, index: usize) -> Result<&PageObject> {
        let len = self.content.page_objects.len();
        self.content
            .page_objects
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Mutable access to the page object at `index`.
    pub fn page_object_mut(&mut self, index: usize) -> Result<&mut PageObject> {
        let len = self.content.page_objects.len();
        self.content
            .page_objects
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// First page object whose `ItemID` is `id`, with its index.
    pub fn find_by_item_id(&self, id: &str) -> Option<(usize, &PageObject)> {
        self.content
            .page_objects
            .iter()
            .enumerate()
            .find(|(_, object)| object.item_id() == Some(id))
    }

    /// Color swatch by name.
    pub fn color(&self, name: &str) -> Option<&Color> {
        self.content
            .colors
            .iter()
            .find(|color| color.name.as_deref() == Some(name))
    }

    /// Set the CMYK value of swatch `name`, adding the swatch if missing.
    pub fn set_color(&mut self, name: &str, cmyk: &str) {
        let existing = self
            .content
            .colors
            .iter_mut()
            .find(|color| color.name.as_deref() == Some(name));
        match existing {
            Some(color) => color.cmyk = Some(cmyk.to_string()),
            None => self.content.colors.push(Color::cmyk(name, cmyk)),
        }
    }

    /// The paragraph style marked as default, else the first one.
    pub fn default_paragraph_style(&self) -> Option<&ParagraphStyle> {
        let styles = &self.content.paragraph_styles;
        styles
            .iter()
            .find(|style| style.is_default())
            .or_else(|| styles.first())
    }

    /// The character style marked as default, else the first one.
    pub fn default_character_style(&self) -> Option<&CharacterStyle> {
        let styles = &self.content.character_styles;
        styles
            .iter()
            .find(|style| style.is_default())
            .or_else(|| styles.first())
    }

    /// The first master page.
    pub fn master_page(&self) -> Option<&Page> {
        self.content.master_pages.first()
    }

    /// The first page.
    pub fn page(&self) -> Option<&Page> {
        self.content.pages.first()
    }

    /// Layers in document order.
    pub fn layers(&self) -> &[Layer] {
        &self.content.layers
    }
}
