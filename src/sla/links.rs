//! Inspection of text chains.
//!
//! Linked text frames form a doubly linked list through `NEXTITEM` and
//! `BACKITEM`, each holding the `ItemID` of the neighbour or `-1`.

use std::fmt;

use indexmap::IndexMap;

use super::document::Document;
use super::mutate::NO_LINK;

/// A link value that actually points somewhere.
pub(crate) fn link_target(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != NO_LINK)
}

/// Which direction of a chain an issue concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDirection {
    Next,
    Back,
}

impl LinkDirection {
    fn attribute(self) -> &'static str {
        match self {
            LinkDirection::Next => "NEXTITEM",
            LinkDirection::Back => "BACKITEM",
        }
    }
}

/// A problem found by [`Document::link_issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkIssue {
    /// The link names an `ItemID` no page object has.
    Dangling {
        index: usize,
        direction: LinkDirection,
        target: String,
    },
    /// The target exists but does not link back.
    Asymmetric {
        index: usize,
        direction: LinkDirection,
        target: String,
    },
    /// Several page objects share one `ItemID`.
    DuplicateItemId { id: String, indices: Vec<usize> },
}

impl fmt::Display for LinkIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkIssue::Dangling {
                index,
                direction,
                target,
            } => write!(
                f,
                "page object {} has {}={} but no such item exists",
                index,
                direction.attribute(),
                target
            ),
            LinkIssue::Asymmetric {
                index,
                direction,
                target,
            } => write!(
                f,
                "page object {} has {}={} but the target does not link back",
                index,
                direction.attribute(),
                target
            ),
            LinkIssue::DuplicateItemId { id, indices } => {
                write!(f, "ItemID {} is used by page objects {:?}", id, indices)
            },
        }
    }
}

impl Document {
    /// Check every text chain for broken links and duplicate identifiers.
    ///
    /// An empty result means every link resolves to exactly one object that
    /// links back. Links to an `ItemID` held by several objects are only
    /// reported through [`LinkIssue::DuplicateItemId`].
    pub fn link_issues(&self) -> Vec<LinkIssue> {
        let objects = self.page_objects();
        let mut by_id: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (index, object) in objects.iter().enumerate() {
            if let Some(id) = object.item_id() {
                by_id.entry(id).or_default().push(index);
            }
        }

        let mut issues = Vec::new();
        for (index, object) in objects.iter().enumerate() {
            let links = [
                (LinkDirection::Next, object.attrs.next_item.as_deref()),
                (LinkDirection::Back, object.attrs.back_item.as_deref()),
            ];
            for (direction, value) in links {
                let Some(target) = link_target(value) else {
                    continue;
                };
                let target_index = match by_id.get(target).map(Vec::as_slice) {
                    Some(&[single]) => single,
                    // reported once below as DuplicateItemId
                    Some(&[_, _, ..]) => continue,
                    _ => {
                        issues.push(LinkIssue::Dangling {
                            index,
                            direction,
                            target: target.to_string(),
                        });
                        continue;
                    },
                };
                let partner = &objects[target_index].attrs;
                let reverse = match direction {
                    LinkDirection::Next => partner.back_item.as_deref(),
                    LinkDirection::Back => partner.next_item.as_deref(),
                };
                if object.item_id().is_none() || reverse != object.item_id() {
                    issues.push(LinkIssue::Asymmetric {
                        index,
                        direction,
                        target: target.to_string(),
                    });
                }
            }
        }

        issues.extend(
            by_id
                .into_iter()
                .filter(|(_, indices)| indices.len() > 1)
                .map(|(id, indices)| LinkIssue::DuplicateItemId {
                    id: id.to_string(),
                    indices,
                }),
        );
        issues
    }
}
