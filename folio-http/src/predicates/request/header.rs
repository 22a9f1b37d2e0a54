//! Request header matching predicate.
//!
//! Re-exports the shared header predicate from
//! [`header`](crate::predicates::header); it applies to any subject with a
//! header map, requests included.

pub use crate::predicates::header::{Header, HeaderPredicate, Operation};
