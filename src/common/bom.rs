//! Byte Order Mark (BOM) handling for SLA input.
//!
//! SLA files are UTF-8. Some editors prepend a UTF-8 BOM, which is skipped;
//! any other BOM means the bytes are in an encoding this crate does not read.

use crate::common::{Error, Result};

/// Supported BOM encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl BomKind {
    /// Returns the byte representation of the BOM.
    #[inline]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            BomKind::Utf8 => &UTF8_BOM,
            BomKind::Utf16Le => &UTF16_LE_BOM,
            BomKind::Utf16Be => &UTF16_BE_BOM,
            BomKind::Utf32Le => &UTF32_LE_BOM,
            BomKind::Utf32Be => &UTF32_BE_BOM,
        }
    }
}

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian BOM bytes.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-16 big-endian BOM bytes.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
/// UTF-32 little-endian BOM bytes.
pub const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
/// UTF-32 big-endian BOM bytes.
pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];

/// Detect a BOM at the start of `bytes`.
pub fn detect_bom(bytes: &[u8]) -> Option<BomKind> {
    // UTF-32 LE shares its first two bytes with UTF-16 LE, so test it first.
    [
        BomKind::Utf32Be,
        BomKind::Utf32Le,
        BomKind::Utf8,
        BomKind::Utf16Be,
        BomKind::Utf16Le,
    ]
    .into_iter()
    .find(|kind| bytes.starts_with(kind.as_bytes()))
}

/// Return `bytes` without a leading UTF-8 BOM.
///
/// Fails if the input starts with a UTF-16 or UTF-32 BOM.
pub fn strip_utf8_bom(bytes: &[u8]) -> Result<&[u8]> {
    match detect_bom(bytes) {
        None => Ok(bytes),
        Some(BomKind::Utf8) => Ok(&bytes[UTF8_BOM.len()..]),
        Some(kind) => Err(Error::Parse(format!(
            "unsupported encoding {:?}, SLA documents are UTF-8",
            kind
        ))),
    }
}
