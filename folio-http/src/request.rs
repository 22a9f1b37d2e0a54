use http::{Request, request::Parts};

use crate::predicates::header::HasHeaders;

/// An inbound HTTP request as seen by cacheability predicates.
///
/// Holds the request decomposed into parts and body so predicates can
/// inspect the parts while threading the whole request through the chain
/// by value. The body is never read here — cacheability is decided from
/// method, path, query string and headers only — so the wrapper stays
/// generic over any body type.
#[derive(Debug)]
pub struct CacheableRequest<B> {
    parts: Parts,
    body: B,
}

impl<B> CacheableRequest<B> {
    /// Wraps a request for predicate evaluation.
    pub fn from_request(request: Request<B>) -> Self {
        let (parts, body) = request.into_parts();
        Self { parts, body }
    }

    /// Reassembles the original request, e.g. to forward it upstream.
    pub fn into_request(self) -> Request<B> {
        Request::from_parts(self.parts, self.body)
    }

    /// The request head (method, URI, headers).
    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    /// Decomposes into head and body.
    pub fn into_parts(self) -> (Parts, B) {
        (self.parts, self.body)
    }
}

impl<B> HasHeaders for CacheableRequest<B> {
    fn headers(&self) -> &http::HeaderMap {
        &self.parts.headers
    }
}
