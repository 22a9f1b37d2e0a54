//! The criteria base contract and its entity-specific variants.

use std::fmt::{Debug, Display};
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::author::Author;

mod author;
mod book;

pub use author::AuthorSearchCriteria;
pub use book::BookSearchCriteria;

static SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[`'’.]").expect("pattern compiles"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]+").expect("pattern compiles"));

/// Normalizes a raw title into a provider-safe query string.
///
/// Rules: `&` becomes `and`, apostrophes, backticks and periods are
/// dropped, every remaining run of non-word characters collapses to a
/// single space, and the result is trimmed.
///
/// Idempotent — normalizing an already-normalized string yields the same
/// string. Blank or whitespace-only input yields the empty string; this
/// function never panics.
pub fn query_title(title: &str) -> String {
    let title = title.replace('&', "and");
    let title = SPECIAL_CHARS.replace_all(&title, "");
    let title = NON_WORD.replace_all(&title, " ");
    title.trim().to_string()
}

/// The capability every entity-specific criteria variant provides.
///
/// Orchestrators and indexer clients depend on this trait alone, so a new
/// searchable entity type is a new variant, not a change to them.
pub trait SearchCriteria: Display + Debug {
    /// The author the search is scoped to.
    fn author(&self) -> &Author;

    /// The normalized, provider-safe query string for this search.
    ///
    /// Recomputed on each access so it always reflects the current field
    /// values; callers should treat criteria as immutable once handed to
    /// indexer clients.
    fn query(&self) -> String;
}

/// Shared fields every criteria variant is composed from.
#[derive(Debug, Clone)]
pub struct SearchCriteriaBase {
    author: Arc<Author>,
    user_invoked_search: bool,
    interactive_search: bool,
}

impl SearchCriteriaBase {
    /// Creates the base for an automatic (non-interactive) search.
    pub fn new(author: Arc<Author>) -> Self {
        Self {
            author,
            user_invoked_search: false,
            interactive_search: false,
        }
    }

    /// Marks the search as explicitly requested by a user.
    pub fn user_invoked(mut self, user_invoked: bool) -> Self {
        self.user_invoked_search = user_invoked;
        self
    }

    /// Marks the search as interactive (results shown to the user for
    /// manual selection).
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive_search = interactive;
        self
    }

    /// The owning author reference.
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Whether a user explicitly requested this search.
    pub fn user_invoked_search(&self) -> bool {
        self.user_invoked_search
    }

    /// Whether this is an interactive search.
    pub fn interactive_search(&self) -> bool {
        self.interactive_search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_ampersand() {
        assert_eq!(query_title("Mistborn & Elantris"), "Mistborn and Elantris");
    }

    #[test]
    fn test_drops_special_characters() {
        assert_eq!(query_title("The King's Dog."), "The Kings Dog");
        assert_eq!(query_title("Warbreaker’s `Edge`"), "Warbreakers Edge");
    }

    #[test]
    fn test_collapses_punctuation_runs() {
        assert_eq!(query_title("Skyward!!! -- Starsight"), "Skyward Starsight");
    }

    #[test]
    fn test_idempotent() {
        for title in [
            "The Way of Kings",
            "Mistborn & Elantris",
            "The King's Dog.",
            "Skyward!!! -- Starsight",
            "Où est Brandon?",
        ] {
            let once = query_title(title);
            assert_eq!(query_title(&once), once);
        }
    }

    #[test]
    fn test_blank_input_yields_empty() {
        assert_eq!(query_title(""), "");
        assert_eq!(query_title("   "), "");
        assert_eq!(query_title("\t \n"), "");
    }
}
