#![warn(missing_docs)]
//! # folio-core
//!
//! Protocol-agnostic cacheability contract for the folio media-library.
//!
//! The single abstraction here is the [`Predicate`] trait: an injected,
//! swappable policy that inspects a subject (typically an HTTP request)
//! and returns a [`Cacheable`](PredicateResult::Cacheable) or
//! [`NonCacheable`](PredicateResult::NonCacheable) verdict. Enforcement
//! layers (like the tower middleware in `folio-tower`) depend only on this
//! contract, so caching rules can evolve without touching them.
//!
//! Predicates are total: every well-formed subject yields a verdict, never
//! an error and never an "unknown" state. They must also be free of side
//! effects so they can run on every request without accumulating cost.
//!
//! Concrete predicates over HTTP requests live in `folio-http`; this crate
//! only provides the contract, the [`Neutral`] identity predicate and the
//! [`And`]/[`Or`]/[`Not`] combinators.

pub mod predicate;

pub use predicate::{And, Neutral, Not, Or, Predicate, PredicateExt, PredicateResult};
