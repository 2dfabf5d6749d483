//! Item identifier generation.
//!
//! The host application stamps every page object with an `ItemID`: a
//! positive decimal integer that is unique within the document.

use rand::RngExt;
use std::collections::HashSet;

/// Generate a random item identifier not present in `taken`.
pub fn generate_item_id(taken: &HashSet<&str>) -> String {
    let mut rng = rand::rng();
    loop {
        let candidate: u32 = rng.random_range(1..=i32::MAX as u32);
        let mut buf = itoa::Buffer::new();
        let id = buf.format(candidate);
        if !taken.contains(id) {
            return id.to_string();
        }
    }
}
