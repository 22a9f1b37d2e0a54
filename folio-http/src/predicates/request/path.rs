//! Path pattern matching predicate, built on
//! [actix-router](https://docs.rs/actix-router) patterns.

use actix_router::ResourceDef;
use async_trait::async_trait;
use folio_core::{Neutral, Predicate, PredicateResult};

use crate::CacheableRequest;

/// A predicate that matches request paths against a pattern.
///
/// Pattern syntax: `{name}` matches one path segment, `{name:regex}` adds
/// a regex constraint, `{tail}*` matches the remaining segments.
#[derive(Debug)]
pub struct Path<P> {
    resource: ResourceDef,
    inner: P,
}

impl<S> Path<Neutral<S>> {
    /// Creates a predicate matching request paths against the pattern.
    pub fn new(resource: ResourceDef) -> Self {
        Self {
            resource,
            inner: Neutral::new(),
        }
    }
}

/// Extension trait for adding a path match to a predicate chain.
pub trait PathPredicate: Sized {
    /// Adds a path pattern match to this predicate chain.
    fn path(self, resource: String) -> Path<Self>;
}

impl<P> PathPredicate for P
where
    P: Predicate,
{
    fn path(self, resource: String) -> Path<Self> {
        Path {
            resource: ResourceDef::from(resource),
            inner: self,
        }
    }
}

#[async_trait]
impl<P, B> Predicate for Path<P>
where
    P: Predicate<Subject = CacheableRequest<B>> + Send + Sync,
    B: Send + 'static,
{
    type Subject = P::Subject;

    async fn check(&self, request: Self::Subject) -> PredicateResult<Self::Subject> {
        match self.inner.check(request).await {
            PredicateResult::Cacheable(request) => {
                if self.resource.is_match(request.parts().uri.path()) {
                    PredicateResult::Cacheable(request)
                } else {
                    PredicateResult::NonCacheable(request)
                }
            }
            PredicateResult::NonCacheable(request) => PredicateResult::NonCacheable(request),
        }
    }
}
