//! Escaping policy for SLA markup.
//!
//! Attribute values and element text are escaped exactly once, here, when a
//! document is written. Nothing post-processes the serialized bytes, so a
//! value that literally contains `&#xA;` is written as `&amp;#xA;` and reads
//! back unchanged.
//!
//! Line breaks and tabs inside attribute values are governed by
//! [`LineBreakPolicy`]. The host application stores story text in `CH`
//! attributes, so the default keeps them as raw bytes.

use crate::common::{Error, Result};
use aho_corasick::AhoCorasick;
use memchr::{memchr, memchr3};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How `\n`, `\r` and `\t` inside attribute values are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreakPolicy {
    /// Written as raw bytes.
    #[default]
    Literal,
    /// Written as `&#xA;`, `&#xD;` and `&#x9;`, which survive attribute-value
    /// normalization in strictly conformant readers.
    CharRef,
}

// Static initialization: automata are built only once, thread-safe
static ATTR_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["&", "<", ">", "\""]).expect("Failed to build attribute escaper")
});

static ATTR_CHARREF_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["&", "<", ">", "\"", "\n", "\r", "\t"])
        .expect("Failed to build attribute escaper")
});

static TEXT_ESCAPER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(["&", "<", ">"]).expect("Failed to build text escaper"));

const ATTR_REPLACEMENTS: [&str; 4] = ["&amp;", "&lt;", "&gt;", "&quot;"];
const ATTR_CHARREF_REPLACEMENTS: [&str; 7] =
    ["&amp;", "&lt;", "&gt;", "&quot;", "&#xA;", "&#xD;", "&#x9;"];
const TEXT_REPLACEMENTS: [&str; 3] = ["&amp;", "&lt;", "&gt;"];

#[inline]
fn has_markup_chars(bytes: &[u8]) -> bool {
    memchr3(b'&', b'<', b'>', bytes).is_some()
}

/// Escape an attribute value for use between double quotes.
///
/// # Examples
///
/// ```
/// use scribus_sla::common::xml::{escape_attr, LineBreakPolicy};
/// assert_eq!(escape_attr("a & \"b\"", LineBreakPolicy::Literal), "a &amp; &quot;b&quot;");
/// assert_eq!(escape_attr("one\ntwo", LineBreakPolicy::Literal), "one\ntwo");
/// assert_eq!(escape_attr("one\ntwo", LineBreakPolicy::CharRef), "one&#xA;two");
/// ```
pub fn escape_attr(s: &str, policy: LineBreakPolicy) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let quote = memchr(b'"', bytes).is_some();
    match policy {
        LineBreakPolicy::Literal => {
            if !quote && !has_markup_chars(bytes) {
                return Cow::Borrowed(s);
            }
            Cow::Owned(ATTR_ESCAPER.replace_all(s, &ATTR_REPLACEMENTS))
        },
        LineBreakPolicy::CharRef => {
            if !quote && !has_markup_chars(bytes) && memchr3(b'\n', b'\r', b'\t', bytes).is_none() {
                return Cow::Borrowed(s);
            }
            Cow::Owned(ATTR_CHARREF_ESCAPER.replace_all(s, &ATTR_CHARREF_REPLACEMENTS))
        },
    }
}

/// Escape element text content.
///
/// # Examples
///
/// ```
/// use scribus_sla::common::xml::escape_text;
/// assert_eq!(escape_text("<tag> & \"quoted\""), "&lt;tag&gt; &amp; \"quoted\"");
/// ```
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !has_markup_chars(s.as_bytes()) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(TEXT_ESCAPER.replace_all(s, &TEXT_REPLACEMENTS))
}

/// Resolve entity and character references.
///
/// Handles the five predefined entities plus decimal (`&#10;`) and
/// hexadecimal (`&#xA;`) character references. Anything else after an `&`
/// is a parse error, as it would be for any conformant reader.
///
/// # Examples
///
/// ```
/// use scribus_sla::common::xml::unescape;
/// assert_eq!(unescape("&lt;a &amp; b&gt;").unwrap(), "<a & b>");
/// assert_eq!(unescape("one&#xA;two&#10;three").unwrap(), "one\ntwo\nthree");
/// assert!(unescape("&nbsp;").is_err());
/// ```
pub fn unescape(s: &str) -> Result<Cow<'_, str>> {
    let Some(first) = memchr(b'&', s.as_bytes()) else {
        return Ok(Cow::Borrowed(s));
    };

    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..first]);
    let mut rest = &s[first..];

    while let Some(amp) = memchr(b'&', rest.as_bytes()) {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let semi = memchr(b';', after.as_bytes())
            .ok_or_else(|| Error::parse(format!("unterminated reference in {:?}", s)))?;
        out.push(resolve_reference(&after[..semi])?);
        rest = &after[semi + 1..];
    }
    out.push_str(rest);
    Ok(Cow::Owned(out))
}

/// Resolve the body of a single reference (the part between `&` and `;`).
pub(crate) fn resolve_reference(name: &str) -> Result<char> {
    let ch = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok()
            } else {
                None
            };
            code.and_then(char::from_u32)
        },
    };
    ch.ok_or_else(|| Error::parse(format!("unknown reference &{};", name)))
}
