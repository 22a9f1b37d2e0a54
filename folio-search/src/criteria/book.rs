use std::fmt;
use std::sync::Arc;

use crate::author::Author;

use super::{SearchCriteria, SearchCriteriaBase, query_title};

/// Criteria for searching indexers for one specific book.
///
/// Pure data holder with derived accessors; construct one per search
/// request and discard it when the search completes.
#[derive(Debug, Clone)]
pub struct BookSearchCriteria {
    base: SearchCriteriaBase,
    title: String,
    year: u16,
    isbn: Option<String>,
    disambiguation: Option<String>,
}

impl BookSearchCriteria {
    /// Creates criteria for the given book. ISBN and disambiguation are
    /// optional and default to absent.
    pub fn new(author: Arc<Author>, title: impl Into<String>, year: u16) -> Self {
        Self {
            base: SearchCriteriaBase::new(author),
            title: title.into(),
            year,
            isbn: None,
            disambiguation: None,
        }
    }

    /// Builds from an already-configured base (e.g. an interactive search).
    pub fn from_base(base: SearchCriteriaBase, title: impl Into<String>, year: u16) -> Self {
        Self {
            base,
            title: title.into(),
            year,
            isbn: None,
            disambiguation: None,
        }
    }

    /// Sets the ISBN.
    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    /// Sets the disambiguation tag (e.g. an edition note).
    pub fn disambiguation(mut self, disambiguation: impl Into<String>) -> Self {
        self.disambiguation = Some(disambiguation.into());
        self
    }

    /// The shared criteria base.
    pub fn base(&self) -> &SearchCriteriaBase {
        &self.base
    }

    /// The raw book title as stored in the library.
    pub fn book_title(&self) -> &str {
        &self.title
    }

    /// The book's publication year.
    pub fn book_year(&self) -> u16 {
        self.year
    }

    /// The ISBN, if known.
    pub fn book_isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    /// The disambiguation tag, if any.
    pub fn book_disambiguation(&self) -> Option<&str> {
        self.disambiguation.as_deref()
    }
}

impl SearchCriteria for BookSearchCriteria {
    fn author(&self) -> &Author {
        self.base.author()
    }

    fn query(&self) -> String {
        query_title(&self.title)
    }
}

// Log parsing downstream depends on this exact shape; do not change it.
impl fmt::Display for BookSearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} - {} ({})]",
            self.base.author().name,
            self.title,
            self.year
        )
    }
}
