//! Page objects: frames, shapes, lines, groups and tables.

use std::fmt;

use crate::sla::attrs::{AttributeGroup, attribute_group};
use crate::sla::element::Element;

use super::story::StoryText;

attribute_group! {
    /// Attributes of a `PAGEOBJECT` element.
    pub struct PageObjectAttributes {
        x => "XPOS",
        y => "YPOS",
        own_page => "OwnPage",
        item_id => "ItemID",
        item_type => "PTYPE",
        width => "WIDTH",
        height => "HEIGHT",
        frame_type => "FRTYPE",
        clip_edited => "CLIPEDIT",
        line_width => "PWIDTH",
        line_art => "PLINEART",
        local_scale_x => "LOCALSCX",
        local_scale_y => "LOCALSCY",
        local_x => "LOCALX",
        local_y => "LOCALY",
        local_rotation => "LOCALROT",
        show_picture => "PICART",
        scale_type => "SCALETYPE",
        keep_ratio => "RATIO",
        page_number => "Pagenumber",
        image_file => "PFILE",
        image_render_intent => "IRENDER",
        embedded_profile => "EMBEDDED",
        path => "path",
        contour_path => "copath",
        group_x => "gXpos",
        group_y => "gYpos",
        group_width => "gWidth",
        group_height => "gHeight",
        layer => "LAYER",
        next_item => "NEXTITEM",
        back_item => "BACKITEM",
        image_profile => "PRFILE",
        columns => "COLUMNS",
        column_gap => "COLGAP",
        auto_text => "AUTOTEXT",
        text_left => "EXTRA",
        text_top => "TEXTRA",
        text_bottom => "BEXTRA",
        text_right => "REXTRA",
        vertical_align => "VAlign",
        flop => "FLOP",
        pdf_link => "PLTSHOW",
        baseline_offset => "BASEOF",
        text_path_type => "textPathType",
        text_path_flipped => "textPathFlipped",
        paragraph_style => "PSTYLE",
    }
}

/// Kind of a page object, decoded from its `PTYPE` code.
///
/// Codes follow the numbering Scribus writes: a text frame is `4` and an
/// image frame is `2`. Code `1` is not a text frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemType {
    ImageFrame,
    TextFrame,
    Line,
    Polygon,
    PolyLine,
    PathText,
    RenderFrame,
    Group,
    RegularPolygon,
    Arc,
    Spiral,
    Table,
    NoteFrame,
    /// A code this library does not name, kept verbatim
    Other(String),
}

impl ItemType {
    /// Decode a `PTYPE` value.
    pub fn from_code(code: &str) -> Self {
        match code {
            "2" => ItemType::ImageFrame,
            "4" => ItemType::TextFrame,
            "5" => ItemType::Line,
            "6" => ItemType::Polygon,
            "7" => ItemType::PolyLine,
            "8" => ItemType::PathText,
            "9" => ItemType::RenderFrame,
            "12" => ItemType::Group,
            "13" => ItemType::RegularPolygon,
            "14" => ItemType::Arc,
            "15" => ItemType::Spiral,
            "16" => ItemType::Table,
            "17" => ItemType::NoteFrame,
            other => ItemType::Other(other.to_string()),
        }
    }

    /// The `PTYPE` value.
    pub fn code(&self) -> &str {
        match self {
            ItemType::ImageFrame => "2",
            ItemType::TextFrame => "4",
            ItemType::Line => "5",
            ItemType::Polygon => "6",
            ItemType::PolyLine => "7",
            ItemType::PathText => "8",
            ItemType::RenderFrame => "9",
            ItemType::Group => "12",
            ItemType::RegularPolygon => "13",
            ItemType::Arc => "14",
            ItemType::Spiral => "15",
            ItemType::Table => "16",
            ItemType::NoteFrame => "17",
            ItemType::Other(code) => code,
        }
    }

    /// Human-readable kind, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            ItemType::ImageFrame => "image frame",
            ItemType::TextFrame => "text frame",
            ItemType::Line => "line",
            ItemType::Polygon => "polygon",
            ItemType::PolyLine => "polyline",
            ItemType::PathText => "path text",
            ItemType::RenderFrame => "render frame",
            ItemType::Group => "group",
            ItemType::RegularPolygon => "regular polygon",
            ItemType::Arc => "arc",
            ItemType::Spiral => "spiral",
            ItemType::Table => "table",
            ItemType::NoteFrame => "note frame",
            ItemType::Other(_) => "unknown item",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Other(code) => write!(f, "item of type {:?}", code),
            known => f.write_str(known.describe()),
        }
    }
}

/// One `PAGEOBJECT`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageObject {
    pub attrs: PageObjectAttributes,
    /// Text content; present on text frames and path text
    pub story: Option<StoryText>,
    /// Other children (group members, table cells, image effects, ...)
    pub unknown: Vec<Element>,
}

impl PageObject {
    pub const TAG: &'static str = "PAGEOBJECT";

    pub(crate) fn from_element(element: Element) -> Self {
        let (_, attributes, children) = element.into_parts();
        let mut object = PageObject {
            attrs: PageObjectAttributes::from_attributes(attributes),
            ..Default::default()
        };
        for child in children {
            if child.name() == StoryText::TAG && object.story.is_none() {
                object.story = Some(StoryText::from_element(child));
            } else {
                object.unknown.push(child);
            }
        }
        object
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_attributes(Self::TAG, self.attrs.to_attributes());
        if let Some(story) = &self.story {
            element.add_child(story.to_element());
        }
        element.children_mut().extend(self.unknown.iter().cloned());
        element
    }

    /// Kind of this object; a missing `PTYPE` decodes as an empty code.
    pub fn item_type(&self) -> ItemType {
        ItemType::from_code(self.attrs.item_type.as_deref().unwrap_or_default())
    }

    /// The `ItemID`, if set.
    pub fn item_id(&self) -> Option<&str> {
        self.attrs.item_id.as_deref()
    }

    /// Plain text of the story, or an empty string for objects without one.
    pub fn text(&self) -> String {
        self.story.as_ref().map(StoryText::text).unwrap_or_default()
    }
}
