//! Section identity for the single-page portfolio document.
//!
//! A section is a named region of the continuously-scrolling document. Its identity and position
//! are fixed when the registry is built; only its anchor row is measured later, at layout time,
//! and that measurement lives with the viewport rather than here.

use std::borrow::Borrow;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Stable identifier naming one section of the document (e.g. `about`).
pub struct SectionId(String);

impl SectionId {
    #[must_use]
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One entry of the section registry.
pub struct SectionDescriptor {
    /// Unique, stable identifier.
    pub identifier: SectionId,
    /// Text shown on the navigation control.
    pub label: String,
    /// Position in the document, ascending from the top.
    pub order: usize,
}
