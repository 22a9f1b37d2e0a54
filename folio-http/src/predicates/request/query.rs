//! Query parameter matching predicate.

use async_trait::async_trait;
use folio_core::{Neutral, Predicate, PredicateResult};

use crate::CacheableRequest;

/// Matching operations for query parameters.
#[derive(Debug)]
pub enum Operation {
    /// Match if the parameter equals the value. Format: `(name, expected)`.
    Eq(String, String),
    /// Match if the parameter is present, regardless of value.
    Exist(String),
    /// Match if the parameter value is one of these. Format: `(name, allowed)`.
    In(String, Vec<String>),
}

/// A predicate that matches requests by query parameters.
///
/// A request without a query string, or with one that does not parse,
/// never matches.
#[derive(Debug)]
pub struct Query<P> {
    operation: Operation,
    inner: P,
}

impl<S> Query<Neutral<S>> {
    /// Creates a predicate matching query parameters against the operation.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            inner: Neutral::new(),
        }
    }
}

/// Extension trait for adding a query parameter match to a predicate chain.
pub trait QueryPredicate: Sized {
    /// Adds a query parameter match to this predicate chain.
    fn query(self, operation: Operation) -> Query<Self>;
}

impl<P> QueryPredicate for P
where
    P: Predicate,
{
    fn query(self, operation: Operation) -> Query<Self> {
        Query {
            operation,
            inner: self,
        }
    }
}

#[async_trait]
impl<P, B> Predicate for Query<P>
where
    P: Predicate<Subject = CacheableRequest<B>> + Send + Sync,
    B: Send + 'static,
{
    type Subject = P::Subject;

    async fn check(&self, request: Self::Subject) -> PredicateResult<Self::Subject> {
        match self.inner.check(request).await {
            PredicateResult::Cacheable(request) => {
                let is_cacheable = match request.parts().uri.query().and_then(crate::query::parse)
                {
                    Some(query_map) => match &self.operation {
                        Operation::Eq(name, value) => query_map
                            .get(name)
                            .map(|v| v.contains(value))
                            .unwrap_or(false),
                        Operation::Exist(name) => query_map.contains_key(name),
                        Operation::In(name, values) => query_map
                            .get(name)
                            .map(|v| v.inner().iter().any(|value| values.contains(value)))
                            .unwrap_or(false),
                    },
                    None => false,
                };
                if is_cacheable {
                    PredicateResult::Cacheable(request)
                } else {
                    PredicateResult::NonCacheable(request)
                }
            }
            PredicateResult::NonCacheable(request) => PredicateResult::NonCacheable(request),
        }
    }
}
