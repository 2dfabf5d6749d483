//! Text content of a text frame.
//!
//! A story is a flat sequence: character runs (`ITEXT`) carry the text, and
//! a paragraph marker (`para`) closes the paragraph formed by the runs
//! before it. The formatting of the final, unterminated paragraph lives in
//! `trail`. Inline elements such as `tab` or `breakline` sit between runs
//! and are kept as generic elements in their original position.

use crate::sla::attrs::{Attributes, attribute_group, leaf_element, take_leaf};
use crate::sla::element::Element;

attribute_group! {
    /// Story-wide style defaults (`DefaultStyle`).
    pub struct DefaultStyle = "DefaultStyle" {
        parent => "PARENT",
        character_parent => "CPARENT",
        align => "ALIGN",
        font => "FONT",
        font_size => "FONTSIZE",
    }
}

attribute_group! {
    /// A run of characters sharing one character format (`ITEXT`).
    pub struct TextRun = "ITEXT" {
        character_parent => "CPARENT",
        text => "CH",
        font => "FONT",
        font_size => "FONTSIZE",
        features => "FEATURES",
        fill_color => "FCOLOR",
        fill_shade => "FSHADE",
        stroke_color => "SCOLOR",
        stroke_shade => "SSHADE",
        background_color => "BGCOLOR",
        background_shade => "BGSHADE",
        scale_h => "SCALEH",
        scale_v => "SCALEV",
        baseline_offset => "BASEO",
        kerning => "KERN",
        language => "LANGUAGE",
    }
}

attribute_group! {
    /// Paragraph-level formatting carried by `para` and `trail`.
    pub struct ParagraphFormat {
        parent => "PARENT",
        align => "ALIGN",
        line_spacing_mode => "LINESPMode",
        line_spacing => "LINESP",
        indent => "INDENT",
        right_margin => "RMARGIN",
        first_indent => "FIRST",
        space_before => "VOR",
        space_after => "NACH",
        effect_char_style => "ParagraphEffectCharStyle",
        effect_offset => "ParagraphEffectOffset",
        effect_indent => "ParagraphEffectIndent",
        drop_cap => "DROP",
        drop_cap_lines => "DROPLIN",
        drop_cap_distance => "DROPDIST",
        bullet => "Bullet",
        bullet_str => "BulletStr",
        numeration => "Numeration",
        numeration_format => "NumerationFormat",
        numeration_name => "NumerationName",
        numeration_level => "NumerationLevel",
        numeration_prefix => "NumerationPrefix",
        numeration_suffix => "NumerationSuffix",
        numeration_start => "NumerationStart",
        numeration_higher => "NumerationHigher",
    }
}

impl ParagraphFormat {
    pub const PARAGRAPH_TAG: &'static str = "para";
    pub const TRAIL_TAG: &'static str = "trail";

    /// True if the paragraph is rendered with a bullet.
    pub fn is_bulleted(&self) -> bool {
        self.bullet.as_deref() == Some("1")
    }
}

/// One entry of a story, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryItem {
    /// Styled characters
    Text(TextRun),
    /// End of a paragraph and its formatting
    Paragraph(ParagraphFormat),
    /// Any other inline element, kept verbatim
    Other(Element),
}

impl StoryItem {
    fn from_element(element: Element) -> Self {
        match element.name() {
            TextRun::TAG => take_leaf(element).map_or_else(StoryItem::Other, StoryItem::Text),
            ParagraphFormat::PARAGRAPH_TAG => {
                take_leaf(element).map_or_else(StoryItem::Other, StoryItem::Paragraph)
            },
            _ => StoryItem::Other(element),
        }
    }

    fn to_element(&self) -> Element {
        match self {
            StoryItem::Text(run) => leaf_element(TextRun::TAG, run),
            StoryItem::Paragraph(format) => leaf_element(ParagraphFormat::PARAGRAPH_TAG, format),
            StoryItem::Other(element) => element.clone(),
        }
    }
}

/// The `StoryText` element of a text frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryText {
    pub default_style: Option<DefaultStyle>,
    pub items: Vec<StoryItem>,
    pub trail: Option<ParagraphFormat>,
    pub extra: Attributes,
}

impl StoryText {
    pub const TAG: &'static str = "StoryText";

    pub(crate) fn from_element(element: Element) -> Self {
        let (_, extra, children) = element.into_parts();
        let mut story = StoryText {
            extra,
            ..Default::default()
        };
        for child in children {
            match child.name() {
                DefaultStyle::TAG if story.default_style.is_none() => match take_leaf(child) {
                    Ok(style) => story.default_style = Some(style),
                    Err(child) => story.items.push(StoryItem::Other(child)),
                },
                ParagraphFormat::TRAIL_TAG if story.trail.is_none() => match take_leaf(child) {
                    Ok(trail) => story.trail = Some(trail),
                    Err(child) => story.items.push(StoryItem::Other(child)),
                },
                _ => story.items.push(StoryItem::from_element(child)),
            }
        }
        story
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut element = Element::with_attributes(Self::TAG, self.extra.clone());
        if let Some(style) = &self.default_style {
            element.add_child(leaf_element(DefaultStyle::TAG, style));
        }
        for item in &self.items {
            element.add_child(item.to_element());
        }
        if let Some(trail) = &self.trail {
            element.add_child(leaf_element(ParagraphFormat::TRAIL_TAG, trail));
        }
        element
    }

    /// Character runs in order.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.items.iter().filter_map(|item| match item {
            StoryItem::Text(run) => Some(run),
            _ => None,
        })
    }

    /// The first character run, if any.
    pub fn first_run_mut(&mut self) -> Option<&mut TextRun> {
        self.items.iter_mut().find_map(|item| match item {
            StoryItem::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Paragraph markers in order (the trail is not included).
    pub fn paragraphs(&self) -> impl Iterator<Item = &ParagraphFormat> {
        self.items.iter().filter_map(|item| match item {
            StoryItem::Paragraph(format) => Some(format),
            _ => None,
        })
    }

    /// Plain text: runs concatenated, paragraph markers and line breaks as
    /// `\n`, tabs as `\t`.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for item in &self.items {
            match item {
                StoryItem::Text(run) => text.push_str(run.text.as_deref().unwrap_or_default()),
                StoryItem::Paragraph(_) => text.push('\n'),
                StoryItem::Other(element) => match element.name() {
                    "breakline" => text.push('\n'),
                    "tab" => text.push('\t'),
                    _ => {},
                },
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORY: &str = r#"<StoryText>
        <DefaultStyle PARENT="Default Paragraph Style"/>
        <ITEXT CPARENT="Default Character Style" FONT="FreeSans Regular" CH="one"/>
        <para ParagraphEffectOffset="14.17" Bullet="1" BulletStr="&#x25A0;" NumerationName="&lt;local block&gt;"/>
        <ITEXT CH="two"/>
        <tab/>
        <ITEXT CH="three"/>
        <trail ALIGN="1"/>
    </StoryText>"#;

    fn story() -> StoryText {
        StoryText::from_element(Element::parse(STORY.as_bytes()).unwrap())
    }

    #[test]
    fn test_interleaving_kept() {
        let story = story();
        assert_eq!(story.items.len(), 5);
        assert!(matches!(story.items[0], StoryItem::Text(_)));
        assert!(matches!(story.items[1], StoryItem::Paragraph(_)));
        assert!(matches!(&story.items[3], StoryItem::Other(e) if e.name() == "tab"));
        assert_eq!(story.trail.as_ref().unwrap().align.as_deref(), Some("1"));
        assert_eq!(
            story.default_style.as_ref().unwrap().parent.as_deref(),
            Some("Default Paragraph Style")
        );
    }

    #[test]
    fn test_paragraph_attributes_unescaped() {
        let story = story();
        let para = story.paragraphs().next().unwrap();
        assert!(para.is_bulleted());
        assert_eq!(para.bullet_str.as_deref(), Some("\u{25A0}"));
        assert_eq!(para.numeration_name.as_deref(), Some("<local block>"));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(story().text(), "one\ntwo\tthree");
        assert_eq!(StoryText::default().text(), "");
    }

    #[test]
    fn test_first_run_mut() {
        let mut story = story();
        story.first_run_mut().unwrap().text = Some("uno".to_string());
        let texts: Vec<_> = story.runs().filter_map(|r| r.text.as_deref()).collect();
        assert_eq!(texts, vec!["uno", "two", "three"]);
    }

    #[test]
    fn test_round_trip() {
        let story = story();
        assert_eq!(StoryText::from_element(story.to_element()), story);
    }
}
