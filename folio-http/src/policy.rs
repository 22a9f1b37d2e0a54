//! Ready-made cacheability specifications.

use actix_router::ResourceDef;
use folio_core::{Predicate, PredicateExt};

use crate::CacheableRequest;
use crate::predicates::request::{Method, Path, Query, QueryOperation};

/// The production policy for static-asset style routes.
///
/// Cacheable:
/// - content-hashed asset requests (query parameter `h` present), which
///   change URL when their content changes;
/// - GET requests outside `/api` whose path is under `/static` or
///   `/content`.
///
/// Everything else — API routes, mutating requests, dynamically rendered
/// pages — is non-cacheable. Swappable like any other specification; the
/// enforcement layer never depends on this concrete policy.
pub fn static_assets<B>() -> Box<dyn Predicate<Subject = CacheableRequest<B>> + Send + Sync>
where
    B: Send + 'static,
{
    let hashed_asset = Query::new(QueryOperation::Exist("h".into()));
    let static_content = Method::new(http::Method::GET)
        .and(Path::new(ResourceDef::new("/api/{tail}*")).not())
        .and(
            Path::new(ResourceDef::new("/static/{tail}*"))
                .or(Path::new(ResourceDef::new("/content/{tail}*"))),
        );
    hashed_asset.or(static_content).boxed()
}
