//! Error conversion implementations.
//!
//! Maps errors from the markup library onto the unified
//! [`Error`] type so `?` works across the crate.

use super::types::Error;

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Parse(format!("malformed attribute: {}", err))
    }
}
