#![warn(missing_docs)]
//! # folio-search
//!
//! Typed search criteria for querying external indexers about library
//! entities.
//!
//! A search orchestrator builds one criteria value per search request,
//! reads its normalized [`query`](criteria::SearchCriteria::query) string
//! and hands that to the indexer clients. Criteria values are cheap,
//! immutable after construction and never persisted.
//!
//! Each entity type gets its own variant ([`BookSearchCriteria`],
//! [`AuthorSearchCriteria`]) composed from the shared
//! [`SearchCriteriaBase`], so adding a new searchable entity type requires
//! only a new variant — the orchestrator and indexer clients depend on the
//! [`SearchCriteria`] capability trait alone.

pub mod author;
pub mod criteria;

pub use author::Author;
pub use criteria::{
    AuthorSearchCriteria, BookSearchCriteria, SearchCriteria, SearchCriteriaBase, query_title,
};
