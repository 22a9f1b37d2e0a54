use std::fmt;
use std::sync::Arc;

use crate::author::Author;

use super::{SearchCriteria, SearchCriteriaBase, query_title};

/// Criteria for searching indexers across an author's whole catalogue.
#[derive(Debug, Clone)]
pub struct AuthorSearchCriteria {
    base: SearchCriteriaBase,
}

impl AuthorSearchCriteria {
    /// Creates criteria scoped to the given author.
    pub fn new(author: Arc<Author>) -> Self {
        Self {
            base: SearchCriteriaBase::new(author),
        }
    }

    /// Builds from an already-configured base.
    pub fn from_base(base: SearchCriteriaBase) -> Self {
        Self { base }
    }

    /// The shared criteria base.
    pub fn base(&self) -> &SearchCriteriaBase {
        &self.base
    }
}

impl SearchCriteria for AuthorSearchCriteria {
    fn author(&self) -> &Author {
        self.base.author()
    }

    fn query(&self) -> String {
        query_title(&self.base.author().name)
    }
}

impl fmt::Display for AuthorSearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.base.author().name)
    }
}
