//! The author entity reference shared by all criteria variants.

use serde::{Deserialize, Serialize};

/// Read-only reference to the library author a search is scoped to.
///
/// Criteria variants hold this behind `Arc`, so many concurrent searches
/// may reference the same author without copying or locking. Persistence
/// of the full author entity lives elsewhere; this carries only what the
/// search core needs for query scoping and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Library identifier of the author.
    pub id: u64,
    /// Display name, used in criteria display output and author queries.
    pub name: String,
}

impl Author {
    /// Creates an author reference.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
