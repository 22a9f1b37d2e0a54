//! The cacheability predicate contract.
//!
//! A predicate consumes its subject by value and hands it back inside the
//! verdict, so chains never need to clone the request they are inspecting.

use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;

mod combinators;
mod neutral;

pub use combinators::{And, Not, Or, PredicateExt};
pub use neutral::Neutral;

/// Verdict of a cacheability check, carrying the inspected subject back to
/// the caller.
pub enum PredicateResult<S> {
    /// The response for this subject may be stored and reused.
    Cacheable(S),
    /// The response for this subject must not be stored.
    NonCacheable(S),
}

impl<S> PredicateResult<S> {
    /// Returns the subject, discarding the verdict.
    pub fn into_subject(self) -> S {
        match self {
            PredicateResult::Cacheable(subject) => subject,
            PredicateResult::NonCacheable(subject) => subject,
        }
    }
}

/// An injected, swappable cacheability policy.
///
/// Implementations must be total (a verdict for every well-formed subject)
/// and side-effect-free, and are shared across concurrent request tasks
/// behind `Arc` — so they must not hold per-request mutable state.
#[async_trait]
pub trait Predicate: Debug {
    /// The type being inspected, e.g. an HTTP request wrapper.
    type Subject;

    /// Inspects the subject and returns the verdict, handing the subject
    /// back to the caller.
    async fn check(&self, subject: Self::Subject) -> PredicateResult<Self::Subject>;
}

#[async_trait]
impl<T> Predicate for Box<T>
where
    T: Predicate + ?Sized + Sync,
    T::Subject: Send,
{
    type Subject = T::Subject;

    async fn check(&self, subject: T::Subject) -> PredicateResult<T::Subject> {
        self.as_ref().check(subject).await
    }
}

#[async_trait]
impl<T> Predicate for &T
where
    T: Predicate + ?Sized + Sync,
    T::Subject: Send,
{
    type Subject = T::Subject;

    async fn check(&self, subject: T::Subject) -> PredicateResult<T::Subject> {
        T::check(self, subject).await
    }
}

#[async_trait]
impl<T> Predicate for Arc<T>
where
    T: Predicate + Send + Sync + ?Sized,
    T::Subject: Send,
{
    type Subject = T::Subject;

    async fn check(&self, subject: T::Subject) -> PredicateResult<T::Subject> {
        self.as_ref().check(subject).await
    }
}
