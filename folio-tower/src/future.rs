//! Future types for the cache header service.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use http::Response;
use pin_project::pin_project;

/// Response future of
/// [`CacheHeadersService`](crate::service::CacheHeadersService).
///
/// Resolves to the upstream response with the baseline header state for
/// the cacheability verdict already written (or untouched, for `OPTIONS`
/// requests).
#[pin_project]
pub struct CacheHeadersFuture<ResBody, E> {
    #[pin]
    inner: BoxFuture<'static, Result<Response<ResBody>, E>>,
}

impl<ResBody, E> CacheHeadersFuture<ResBody, E> {
    /// Wraps the verdict-and-dispatch future.
    pub(crate) fn new(inner: BoxFuture<'static, Result<Response<ResBody>, E>>) -> Self {
        Self { inner }
    }
}

impl<ResBody, E> Future for CacheHeadersFuture<ResBody, E> {
    type Output = Result<Response<ResBody>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx)
    }
}
