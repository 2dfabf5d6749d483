//! Generic SLA markup node.
//!
//! [`Element`] is the lossless intermediate between bytes and the typed
//! schema: parsing produces an `Element` tree that the schema consumes, and
//! the schema renders back into an `Element` tree before it is written.
//! Elements the schema does not declare are stored as `Element`s directly.

use crate::common::bom::strip_utf8_bom;
use crate::common::xml::{LineBreakPolicy, escape_attr, escape_text, resolve_reference, unescape};
use crate::common::{Error, Result};
use crate::sla::attrs::Attributes;
use crate::sla::options::WriteOptions;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};
use std::borrow::Cow;

/// A markup element: name, ordered attributes, text and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Attributes,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Create an element with the given attributes
    pub fn with_attributes(name: &str, attributes: Attributes) -> Self {
        Self {
            name: name.to_string(),
            attributes,
            ..Default::default()
        }
    }

    /// Element name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in document order
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable attributes
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Get attribute value by name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set attribute value, keeping its position if it already exists
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Text content (whitespace-only text is not kept)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text content
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Child elements
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable child elements
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    /// Append a child element
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// First child with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// True if the element has neither children nor text.
    pub fn is_attribute_only(&self) -> bool {
        self.children.is_empty() && self.text.is_empty()
    }

    pub(crate) fn into_attributes(self) -> Attributes {
        self.attributes
    }

    /// Split into name, attributes and children. Text is dropped; callers use
    /// this only for elements whose schema has no text content.
    pub(crate) fn into_parts(self) -> (String, Attributes, Vec<Element>) {
        (self.name, self.attributes, self.children)
    }

    /// Parse the root element of an SLA byte stream.
    ///
    /// Comments, processing instructions and the declaration are skipped. A
    /// leading UTF-8 BOM is accepted.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let bytes = strip_utf8_bom(bytes)?;
        let mut reader = Reader::from_reader(bytes);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    if root.is_some() {
                        return Err(Error::parse("content after the root element"));
                    }
                    stack.push(Self::from_start(e)?);
                },
                Event::Empty(ref e) => {
                    let element = Self::from_start(e)?;
                    Self::attach(&mut stack, &mut root, element)?;
                },
                Event::End(_) => {
                    let mut element = stack
                        .pop()
                        .ok_or_else(|| Error::parse("unbalanced end tag"))?;
                    if element.text.trim().is_empty() {
                        element.text.clear();
                    }
                    Self::attach(&mut stack, &mut root, element)?;
                },
                Event::Text(ref t) => {
                    let raw = std::str::from_utf8(t).map_err(Error::parse)?;
                    match stack.last_mut() {
                        Some(current) => current.text.push_str(&unescape(raw)?),
                        None if raw.trim().is_empty() => {},
                        None => return Err(Error::parse("text outside the root element")),
                    }
                },
                Event::CData(ref c) => {
                    let raw = std::str::from_utf8(c).map_err(Error::parse)?;
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(raw);
                    }
                },
                Event::GeneralRef(ref r) => {
                    let name = std::str::from_utf8(r).map_err(Error::parse)?;
                    let ch = resolve_reference(name)?;
                    match stack.last_mut() {
                        Some(current) => current.text.push(ch),
                        None => return Err(Error::parse("reference outside the root element")),
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Error::Parse(format!(
                "unexpected end of input inside <{}>",
                open.name
            )));
        }
        root.ok_or_else(|| Error::parse("no root element found"))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self> {
        let name = std::str::from_utf8(e.name().as_ref())
            .map_err(Error::parse)?
            .to_string();
        let mut attributes = Attributes::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref()).map_err(Error::parse)?;
            let raw = std::str::from_utf8(&attr.value).map_err(Error::parse)?;
            attributes.insert(key.to_string(), unescape(raw)?.into_owned());
        }
        Ok(Self {
            name,
            attributes,
            ..Default::default()
        })
    }

    fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => return Err(Error::parse("multiple root elements")),
        }
        Ok(())
    }

    /// Serialize this element as a complete document: declaration, then the
    /// element tree, then a final newline.
    pub fn to_document_bytes(&self, options: &WriteOptions) -> Result<Vec<u8>> {
        let mut writer = if options.indent > 0 {
            Writer::new_with_indent(Vec::new(), b' ', options.indent)
        } else {
            Writer::new(Vec::new())
        };

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| Error::Serialize(format!("Failed to write XML declaration: {}", e)))?;
        self.write_into(&mut writer, options.line_breaks)?;

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn write_into(&self, writer: &mut Writer<Vec<u8>>, policy: LineBreakPolicy) -> Result<()> {
        check_name(&self.name)?;
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            check_name(key)?;
            let escaped = escape_attr(value, policy);
            start.push_attribute(Attribute {
                key: QName(key.as_bytes()),
                value: Cow::Borrowed(escaped.as_bytes()),
            });
        }

        if self.is_attribute_only() {
            return writer
                .write_event(Event::Empty(start))
                .map_err(|e| Error::Serialize(format!("Failed to write <{}/>: {}", self.name, e)));
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| Error::Serialize(format!("Failed to write <{}>: {}", self.name, e)))?;
        if !self.text.is_empty() {
            writer
                .write_event(Event::Text(BytesText::from_escaped(escape_text(&self.text))))
                .map_err(|e| Error::Serialize(format!("Failed to write text: {}", e)))?;
        }
        for child in &self.children {
            child.write_into(writer, policy)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(|e| Error::Serialize(format!("Failed to write </{}>: {}", self.name, e)))
    }
}

/// Reject names that would produce malformed markup.
fn check_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.')
        || name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '&' | '"' | '\'' | '=' | '/'));
    if bad {
        return Err(Error::serialize(format_args!("invalid markup name {:?}", name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(element: &Element) -> String {
        String::from_utf8(element.to_document_bytes(&WriteOptions::default()).unwrap()).unwrap()
    }

    #[test]
    fn test_parse_nested() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<ROOT Version="1">
    <!-- comment -->
    <A x="1" y="2"/>
    <B>
        <C/>
    </B>
</ROOT>"#;
        let root = Element::parse(xml).unwrap();
        assert_eq!(root.name(), "ROOT");
        assert_eq!(root.get_attribute("Version"), Some("1"));
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.text(), "");
        assert_eq!(root.child("B").unwrap().children()[0].name(), "C");
    }

    #[test]
    fn test_attribute_order_preserved() {
        let root = Element::parse(br#"<R z="1" a="2" m="3"/>"#).unwrap();
        let keys: Vec<&str> = root.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_references_in_attributes_and_text() {
        let root = Element::parse(br#"<R v="a &amp; b&#xA;c">x &lt; y</R>"#).unwrap();
        assert_eq!(root.get_attribute("v"), Some("a & b\nc"));
        assert_eq!(root.text(), "x < y");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Element::parse(b""), Err(Error::Parse(_))));
        assert!(matches!(Element::parse(b"<A><B></A>"), Err(Error::Parse(_))));
        assert!(matches!(Element::parse(b"<A>"), Err(Error::Parse(_))));
        assert!(matches!(Element::parse(br#"<A x="1" x="2"/>"#), Err(Error::Parse(_))));
        assert!(matches!(Element::parse(b"<A/><B/>"), Err(Error::Parse(_))));
        assert!(matches!(Element::parse(br#"<A v="&bogus;"/>"#), Err(Error::Parse(_))));
    }

    #[test]
    fn test_write_header_and_indent() {
        let mut root = Element::new("ROOT");
        root.set_attribute("Version", "1.5.8");
        root.add_child(Element::new("CHILD"));
        let out = write(&root);
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(out.contains("<ROOT Version=\"1.5.8\">\n    <CHILD/>\n</ROOT>"));
    }

    #[test]
    fn test_write_keeps_newlines_literal() {
        let mut root = Element::new("ITEXT");
        root.set_attribute("CH", "line one\nline two");
        let out = write(&root);
        assert!(out.contains("CH=\"line one\nline two\""));
        assert!(!out.contains("&#xA;"));
        let back = Element::parse(out.as_bytes()).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_write_charref_policy() {
        let mut root = Element::new("ITEXT");
        root.set_attribute("CH", "a\nb");
        let options = WriteOptions::new().with_line_breaks(LineBreakPolicy::CharRef);
        let out = String::from_utf8(root.to_document_bytes(&options).unwrap()).unwrap();
        assert!(out.contains("CH=\"a&#xA;b\""));
        assert_eq!(Element::parse(out.as_bytes()).unwrap(), root);
    }

    #[test]
    fn test_write_round_trip_with_text() {
        let mut root = Element::new("HYPHEN");
        let mut exception = Element::new("EXCEPTION");
        exception.set_attribute("WORD", "fish & chips");
        exception.set_text("<odd> text");
        root.add_child(exception);
        assert_eq!(Element::parse(write(&root).as_bytes()).unwrap(), root);
    }

    #[test]
    fn test_write_rejects_bad_names() {
        let root = Element::new("");
        assert!(matches!(
            root.to_document_bytes(&WriteOptions::default()),
            Err(Error::Serialize(_))
        ));
        let mut root = Element::new("OK");
        root.set_attribute("bad name", "1");
        assert!(matches!(
            root.to_document_bytes(&WriteOptions::default()),
            Err(Error::Serialize(_))
        ));
    }

    #[test]
    fn test_whitespace_only_text_is_dropped() {
        let root = Element::parse(b"<R><X> </X><Y>\n\t</Y><Z> a </Z></R>").unwrap();
        assert!(root.child("X").unwrap().is_attribute_only());
        assert!(root.child("Y").unwrap().is_attribute_only());
        assert_eq!(root.child("Z").unwrap().text(), " a ");
        assert!(write(&root).contains("<X/>"));
    }
}
