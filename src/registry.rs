//! The fixed, ordered list of sections making up the portfolio page.
//!
//! Iteration order is the document's top-to-bottom order. Nothing mutates a registry once it is
//! built, so a registry can be shared freely between the tracker and the navigation bar.

use crate::section::{SectionDescriptor, SectionId};
use std::collections::HashSet;
use thiserror::Error;

/// Identifiers of the standard portfolio page, top to bottom.
pub const STANDARD_SECTIONS: [&str; 6] = ["home", "about", "skills", "projects", "blog", "contact"];

#[derive(Debug, Error, PartialEq, Eq)]
/// Configuration defects detected while building a registry.
pub enum RegistryError {
    /// The same identifier was given to two sections.
    #[error("duplicate section identifier `{0}`")]
    Duplicate(SectionId),
    /// A registry needs at least one section to have something active.
    #[error("section registry is empty")]
    Empty,
}

#[derive(Clone, Debug)]
/// Ordered, validated sequence of section descriptors.
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    /// Builds a registry from `(identifier, label)` pairs given in document order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if an identifier repeats and
    /// [`RegistryError::Empty`] if no sections are given.
    pub fn new<I, S, L>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut sections = Vec::new();

        for (order, (identifier, label)) in entries.into_iter().enumerate() {
            let identifier = SectionId::new(identifier);
            if !seen.insert(identifier.clone()) {
                return Err(RegistryError::Duplicate(identifier));
            }
            sections.push(SectionDescriptor {
                identifier,
                label: label.into(),
                order,
            });
        }

        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        tracing::debug!(sections = sections.len(), "section registry built");
        Ok(Self { sections })
    }

    #[must_use]
    /// The six sections of the portfolio page, labelled by capitalising the identifier.
    pub fn standard() -> Self {
        Self {
            sections: STANDARD_SECTIONS
                .iter()
                .enumerate()
                .map(|(order, id)| SectionDescriptor {
                    identifier: SectionId::new(*id),
                    label: capitalise(id),
                    order,
                })
                .collect(),
        }
    }

    /// Sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter()
    }

    #[must_use]
    /// The topmost section, active before any scroll measurement.
    pub fn first(&self) -> &SectionDescriptor {
        // Construction guarantees at least one section.
        &self.sections[0]
    }

    #[must_use]
    /// Looks up a section by identifier.
    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.identifier == id)
    }

    #[must_use]
    /// Document-order index of a section.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.identifier == id)
    }

    #[must_use]
    /// Section at a document-order index.
    pub fn at(&self, index: usize) -> Option<&SectionDescriptor> {
        self.sections.get(index)
    }

    #[must_use]
    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Whether the registry has no sections; never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

fn capitalise(id: &str) -> String {
    let mut chars = id.chars();
    chars.next().map_or_else(String::new, |c| {
        c.to_uppercase().chain(chars).collect::<String>()
    })
}

#[cfg(test)]
#[path = "tests/registry.rs"]
mod tests;
