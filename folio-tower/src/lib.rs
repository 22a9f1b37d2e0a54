#![warn(missing_docs)]
//! Tower middleware enforcing folio's cacheability verdict.
//!
//! [`CacheHeaders`] is a Tower [`Layer`](tower::Layer) and the single
//! enforcement point for cache policy across the HTTP surface. On every
//! inbound request it consults the injected cacheability specification (a
//! [`Predicate`](folio_core::Predicate) over
//! [`CacheableRequest`](folio_http::CacheableRequest)) and guarantees the
//! response headers leave in exactly one of two baseline states — "cache
//! enabled" or "cache disabled" — as defined by
//! [`CacheHeaderPolicy`](folio_http::CacheHeaderPolicy).
//!
//! `OPTIONS` requests pass through untouched: preflight-style requests are
//! never cache-annotated and the specification is never consulted for
//! them.
//!
//! The middleware occupies exactly one slot in the service stack and
//! assumes nothing about the stages before or after it. Faults from the
//! upstream propagate unmodified; there are no retries and no custom error
//! responses.
//!
//! ```ignore
//! use folio_http::policy::static_assets;
//! use folio_tower::CacheHeaders;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(CacheHeaders::new(static_assets::<axum::body::Body>()))
//!     .service(app);
//! ```

pub mod future;
pub mod layer;
pub mod service;

pub use layer::{CacheHeaders, CacheHeadersBuilder};
pub use service::CacheHeadersService;
