//! Paragraph, character, table, cell and notes styles.

use crate::sla::attrs::{AttributeGroup, Attributes, attribute_group, leaf_element, push_leaf};
use crate::sla::element::Element;

attribute_group! {
    /// A paragraph style (`STYLE`).
    pub struct ParagraphStyle = "STYLE" {
        name => "NAME",
        default_style => "DefaultStyle",
        parent => "PARENT",
        align => "ALIGN",
        line_spacing_mode => "LINESPMode",
        line_spacing => "LINESP",
        indent => "INDENT",
        right_margin => "RMARGIN",
        first_indent => "FIRST",
        space_before => "VOR",
        space_after => "NACH",
        paragraph_effect_offset => "ParagraphEffectOffset",
        drop_cap => "DROP",
        drop_cap_lines => "DROPLIN",
        bullet => "Bullet",
        numeration => "Numeration",
        background_color => "BCOLOR",
        background_shade => "BSHADE",
    }
}

attribute_group! {
    /// A character style (`CHARSTYLE`).
    pub struct CharacterStyle = "CHARSTYLE" {
        name => "CNAME",
        default_style => "DefaultStyle",
        font => "FONT",
        font_size => "FONTSIZE",
        features => "FEATURES",
        fill_color => "FCOLOR",
        fill_shade => "FSHADE",
        stroke_color => "SCOLOR",
        background_color => "BGCOLOR",
        background_shade => "BGSHADE",
        stroke_shade => "SSHADE",
        shadow_x => "TXTSHX",
        shadow_y => "TXTSHY",
        outline => "TXTOUT",
        underline_position => "TXTULP",
        underline_width => "TXTULW",
        strike_position => "TXTSTP",
        strike_width => "TXTSTW",
        scale_h => "SCALEH",
        scale_v => "SCALEV",
        baseline_offset => "BASEO",
        kerning => "KERN",
        language => "LANGUAGE",
    }
}

impl ParagraphStyle {
    /// True if the host application marks this as the default style.
    pub fn is_default(&self) -> bool {
        self.default_style.as_deref() == Some("1")
    }
}

impl CharacterStyle {
    /// True if the host application marks this as the default style.
    pub fn is_default(&self) -> bool {
        self.default_style.as_deref() == Some("1")
    }
}

attribute_group! {
    /// One stroke of a table or cell border.
    pub struct TableBorderLine = "TableBorderLine" {
        width => "Width",
        pen_style => "PenStyle",
        color => "Color",
        shade => "Shade",
    }
}

/// One side of a table or cell border: a stack of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBorder {
    pub lines: Vec<TableBorderLine>,
    pub extra: Attributes,
    pub unknown: Vec<Element>,
}

impl TableBorder {
    fn from_element(element: Element) -> Self {
        let (_, extra, children) = element.into_parts();
        let mut border = TableBorder {
            extra,
            ..Default::default()
        };
        for child in children {
            if child.name() == TableBorderLine::TAG {
                push_leaf(child, &mut border.lines, &mut border.unknown);
            } else {
                border.unknown.push(child);
            }
        }
        border
    }

    fn to_element(&self, tag: &str) -> Element {
        let mut element = Element::with_attributes(tag, self.extra.clone());
        for line in &self.lines {
            element.add_child(leaf_element(TableBorderLine::TAG, line));
        }
        for child in &self.unknown {
            element.add_child(child.clone());
        }
        element
    }
}

/// The four border sides shared by table and cell styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBorders {
    pub left: Option<TableBorder>,
    pub right: Option<TableBorder>,
    pub top: Option<TableBorder>,
    pub bottom: Option<TableBorder>,
}

impl TableBorders {
    const LEFT: &'static str = "TableBorderLeft";
    const RIGHT: &'static str = "TableBorderRight";
    const TOP: &'static str = "TableBorderTop";
    const BOTTOM: &'static str = "TableBorderBottom";

    /// Claim `child` if it is a border side; hand it back otherwise.
    fn accept(&mut self, child: Element) -> Option<Element> {
        let slot = match child.name() {
            Self::LEFT => &mut self.left,
            Self::RIGHT => &mut self.right,
            Self::TOP => &mut self.top,
            Self::BOTTOM => &mut self.bottom,
            _ => return Some(child),
        };
        if slot.is_some() {
            return Some(child);
        }
        *slot = Some(TableBorder::from_element(child));
        None
    }

    fn write(&self, parent: &mut Element) {
        for (tag, side) in [
            (Self::LEFT, &self.left),
            (Self::RIGHT, &self.right),
            (Self::TOP, &self.top),
            (Self::BOTTOM, &self.bottom),
        ] {
            if let Some(border) = side {
                parent.add_child(border.to_element(tag));
            }
        }
    }
}

attribute_group! {
    /// Attributes of a `TableStyle` element.
    pub struct TableStyleAttributes {
        name => "NAME",
        default_style => "DefaultStyle",
        fill_color => "FillColor",
        fill_shade => "FillShade",
    }
}

/// A table style with its borders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStyle {
    pub attrs: TableStyleAttributes,
    pub borders: TableBorders,
    pub unknown: Vec<Element>,
}

impl TableStyle {
    pub const TAG: &'static str = "TableStyle";

    pub(crate) fn from_element(element: Element) -> Self {
        let (_, attributes, children) = element.into_parts();
        let mut style = TableStyle {
            attrs: TableStyleAttributes::from_attributes(attributes),
            ..Default::default()
        };
        for child in children {
            if let Some(child) = style.borders.accept(child) {
                style.unknown.push(child);
            }
        }
        style
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_attributes(Self::TAG, self.attrs.to_attributes());
        self.borders.write(&mut element);
        element.children_mut().extend(self.unknown.iter().cloned());
        element
    }
}

attribute_group! {
    /// Attributes of a `CellStyle` element.
    pub struct CellStyleAttributes {
        name => "NAME",
        default_style => "DefaultStyle",
        fill_color => "FillColor",
        fill_shade => "FillShade",
        left_padding => "LeftPadding",
        right_padding => "RightPadding",
        top_padding => "TopPadding",
        bottom_padding => "BottomPadding",
    }
}

/// A table cell style with its borders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub attrs: CellStyleAttributes,
    pub borders: TableBorders,
    pub unknown: Vec<Element>,
}

impl CellStyle {
    pub const TAG: &'static str = "CellStyle";

    pub(crate) fn from_element(element: Element) -> Self {
        let (_, attributes, children) = element.into_parts();
        let mut style = CellStyle {
            attrs: CellStyleAttributes::from_attributes(attributes),
            ..Default::default()
        };
        for child in children {
            if let Some(child) = style.borders.accept(child) {
                style.unknown.push(child);
            }
        }
        style
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_attributes(Self::TAG, self.attrs.to_attributes());
        self.borders.write(&mut element);
        element.children_mut().extend(self.unknown.iter().cloned());
        element
    }
}

attribute_group! {
    /// Footnote/endnote numbering style (`notesStyle`).
    pub struct NotesStyle = "notesStyle" {
        name => "Name",
        start => "Start",
        endnotes => "Endnotes",
        numbering_type => "Type",
        range => "Range",
        prefix => "Prefix",
        suffix => "Suffix",
        auto_height => "AutoHeight",
        auto_width => "AutoWidth",
        auto_remove => "AutoRemove",
        auto_weld => "AutoWeld",
        super_note => "SuperNote",
        super_master => "SuperMaster",
        marks_style => "MarksStyle",
        notes_style => "NotesStyle",
    }
}
