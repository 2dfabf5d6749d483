//! Page-object editing operations.
//!
//! Every operation addresses a page object by its zero-based position in
//! the document and fails with [`Error::IndexOutOfRange`] instead of
//! panicking when the position is invalid.

use std::collections::HashSet;

use log::trace;

use super::document::Document;
use super::links::link_target;
use super::options::{DuplicateOptions, ItemIdPolicy, LinkPolicy};
use super::schema::{ItemType, PageObject, StoryItem, StoryText, TextRun};
use crate::common::id::generate_item_id;
use crate::common::{Error, Result};

/// Value written to `NEXTITEM`/`BACKITEM` for "no link".
pub(crate) const NO_LINK: &str = "-1";

/// Fail unless `object` is of the `expected` kind.
fn require_type(index: usize, object: &PageObject, expected: ItemType) -> Result<()> {
    let found = object.item_type();
    if found != expected {
        return Err(Error::TypeMismatch {
            index,
            expected: expected.describe(),
            found: found.to_string(),
        });
    }
    Ok(())
}

/// Format a coordinate the way the host application does: whole numbers
/// without a fraction, everything else in shortest round-trip form.
fn format_coordinate(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(Error::InvalidArgument(format!("coordinate {} is not finite", value)));
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let mut buf = itoa::Buffer::new();
        return Ok(buf.format(value as i64).to_string());
    }
    let mut buf = ryu::Buffer::new();
    Ok(buf.format_finite(value).to_string())
}

impl Document {
    /// Insert a copy of the page object at `index` right after it.
    ///
    /// The copy is identical to the original, `ItemID` and links included.
    /// Use [`duplicate_page_object_with`](Self::duplicate_page_object_with)
    /// to give it a fresh identity.
    pub fn duplicate_page_object(&mut self, index: usize) -> Result<()> {
        self.duplicate_page_object_with(index, &DuplicateOptions::default())
    }

    /// Insert a copy of the page object at `index` right after it, applying
    /// the identifier and link policies of `options`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scribus_sla::{Document, DuplicateOptions, ItemIdPolicy, PageObject};
    ///
    /// # fn main() -> scribus_sla::Result<()> {
    /// let mut doc = Document::new();
    /// let mut frame = PageObject::default();
    /// frame.attrs.item_id = Some("7".to_string());
    /// doc.content_mut().page_objects.push(frame);
    ///
    /// let options = DuplicateOptions::new().with_item_id(ItemIdPolicy::Regenerate);
    /// doc.duplicate_page_object_with(0, &options)?;
    /// assert_ne!(doc.page_objects()[1].item_id(), Some("7"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn duplicate_page_object_with(
        &mut self,
        index: usize,
        options: &DuplicateOptions,
    ) -> Result<()> {
        let mut copy = self.page_object(index)?.clone();

        if options.item_id == ItemIdPolicy::Regenerate {
            let taken: HashSet<&str> = self
                .page_objects()
                .iter()
                .filter_map(PageObject::item_id)
                .collect();
            copy.attrs.item_id = Some(generate_item_id(&taken));
        }
        if options.links == LinkPolicy::Detach {
            copy.attrs.next_item = Some(NO_LINK.to_string());
            copy.attrs.back_item = Some(NO_LINK.to_string());
        }

        trace!(
            "Duplicating page object {} (ItemID {:?} -> {:?})",
            index,
            self.page_objects()[index].item_id(),
            copy.item_id()
        );
        self.content_mut().page_objects.insert(index + 1, copy);
        Ok(())
    }

    /// Replace the characters of the first text run of a text frame.
    ///
    /// Other runs, paragraph markers and all formatting stay as they are.
    pub fn set_text(&mut self, index: usize, text: &str) -> Result<()> {
        let object = self.page_object_mut(index)?;
        require_type(index, object, ItemType::TextFrame)?;
        let run = object
            .story
            .as_mut()
            .and_then(StoryText::first_run_mut)
            .ok_or(Error::EmptyStory { index })?;
        trace!("Setting text of page object {} ({} bytes)", index, text.len());
        run.text = Some(text.to_string());
        Ok(())
    }

    /// Move a page object to whole-number coordinates.
    pub fn move_page_object(&mut self, index: usize, x: i64, y: i64) -> Result<()> {
        let object = self.page_object_mut(index)?;
        let mut buf = itoa::Buffer::new();
        object.attrs.x = Some(buf.format(x).to_string());
        object.attrs.y = Some(buf.format(y).to_string());
        trace!("Moved page object {} to ({}, {})", index, x, y);
        Ok(())
    }

    /// Move a page object to fractional coordinates.
    pub fn set_position(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
        let (x_text, y_text) = (format_coordinate(x)?, format_coordinate(y)?);
        let object = self.page_object_mut(index)?;
        trace!("Moved page object {} to ({}, {})", index, x_text, y_text);
        object.attrs.x = Some(x_text);
        object.attrs.y = Some(y_text);
        Ok(())
    }

    /// Point an image frame at another image file.
    ///
    /// Scaling and offsets are kept; the caller adjusts them if the new
    /// image has a different size.
    pub fn set_image(&mut self, index: usize, path: &str) -> Result<()> {
        let object = self.page_object_mut(index)?;
        require_type(index, object, ItemType::ImageFrame)?;
        trace!("Setting image of page object {} to {}", index, path);
        object.attrs.image_file = Some(path.to_string());
        Ok(())
    }

    /// Replace the story of a text frame with one bulleted paragraph per
    /// entry of `items`.
    ///
    /// Each paragraph reuses the character attributes of the first text run
    /// and the format of the first bulleted paragraph marker, falling back
    /// to the first marker of any kind, then to a plain marker. The default
    /// style and the trailing paragraph format are kept.
    pub fn set_bullet_points<S: AsRef<str>>(&mut self, index: usize, items: &[S]) -> Result<()> {
        let object = self.page_object_mut(index)?;
        require_type(index, object, ItemType::TextFrame)?;
        let story = object.story.get_or_insert_with(StoryText::default);

        let run_template = story.runs().next().cloned().unwrap_or_default();
        let marker_template = story
            .paragraphs()
            .find(|format| format.is_bulleted())
            .or_else(|| story.paragraphs().next())
            .cloned()
            .unwrap_or_default();

        story.items = items
            .iter()
            .flat_map(|item| {
                let run = TextRun {
                    text: Some(item.as_ref().to_string()),
                    ..run_template.clone()
                };
                [
                    StoryItem::Text(run),
                    StoryItem::Paragraph(marker_template.clone()),
                ]
            })
            .collect();
        trace!("Set {} bullet points on page object {}", items.len(), index);
        Ok(())
    }

    /// Remove the page object at `index` and return it.
    ///
    /// If it sits in a text chain, its neighbours are linked to each other
    /// so the chain stays intact. Links are left alone while another page
    /// object still carries the same `ItemID`.
    pub fn remove_page_object(&mut self, index: usize) -> Result<PageObject> {
        self.page_object(index)?;
        let removed = self.content_mut().page_objects.remove(index);

        let id = removed
            .item_id()
            .filter(|id| self.find_by_item_id(id).is_none());
        if let Some(id) = id {
            let next = link_target(removed.attrs.next_item.as_deref());
            let back = link_target(removed.attrs.back_item.as_deref());
            for object in &mut self.content_mut().page_objects {
                if back.is_some() && object.item_id() == back
                    && object.attrs.next_item.as_deref() == Some(id)
                {
                    object.attrs.next_item = Some(next.unwrap_or(NO_LINK).to_string());
                }
                if next.is_some() && object.item_id() == next
                    && object.attrs.back_item.as_deref() == Some(id)
                {
                    object.attrs.back_item = Some(back.unwrap_or(NO_LINK).to_string());
                }
            }
        }
        trace!("Removed page object {} (ItemID {:?})", index, removed.item_id());
        Ok(removed)
    }
}
