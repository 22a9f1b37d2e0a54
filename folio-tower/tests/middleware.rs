use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use folio_core::{Neutral, Predicate, PredicateExt, PredicateResult};
use folio_http::predicates::request::Method;
use folio_http::{CacheHeaderPolicy, CacheableRequest};
use folio_tower::CacheHeaders;
use http::header::{CACHE_CONTROL, EXPIRES, HeaderValue, PRAGMA};
use http::{Request, Response};
use tower::{Layer, ServiceExt, service_fn};

type Subject = CacheableRequest<()>;

/// Specification spy: counts calls and returns a fixed verdict.
#[derive(Debug)]
struct Spy {
    calls: Arc<AtomicUsize>,
    verdict: bool,
}

#[async_trait]
impl Predicate for Spy {
    type Subject = Subject;

    async fn check(&self, subject: Subject) -> PredicateResult<Subject> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.verdict {
            PredicateResult::Cacheable(subject)
        } else {
            PredicateResult::NonCacheable(subject)
        }
    }
}

fn request(method: http::Method, uri: &str) -> Request<()> {
    Request::builder().method(method).uri(uri).body(()).unwrap()
}

async fn empty_ok(_req: Request<()>) -> Result<Response<()>, Infallible> {
    Ok(Response::new(()))
}

#[tokio::test]
async fn options_requests_pass_through_untouched() {
    let calls = Arc::new(AtomicUsize::new(0));
    let layer = CacheHeaders::new(Spy {
        calls: Arc::clone(&calls),
        verdict: true,
    });
    let service = layer.layer(service_fn(empty_ok));

    let response = service
        .oneshot(request(http::Method::OPTIONS, "/books"))
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(response.headers().get(CACHE_CONTROL).is_none());
    assert!(response.headers().get(PRAGMA).is_none());
    assert!(response.headers().get(EXPIRES).is_none());
}

#[tokio::test]
async fn cacheable_verdict_writes_the_enable_state() {
    let layer = CacheHeaders::new(Spy {
        calls: Arc::new(AtomicUsize::new(0)),
        verdict: true,
    });
    let service = layer.layer(service_fn(empty_ok));

    let response = service
        .oneshot(request(http::Method::GET, "/books"))
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(CACHE_CONTROL).unwrap(),
        "max-age=31536000, public"
    );
    assert!(response.headers().get(PRAGMA).is_none());
}

#[tokio::test]
async fn non_cacheable_verdict_writes_the_disable_state() {
    let layer = CacheHeaders::new(Spy {
        calls: Arc::new(AtomicUsize::new(0)),
        verdict: false,
    });
    let service = layer.layer(service_fn(empty_ok));

    let response = service
        .oneshot(request(http::Method::GET, "/books"))
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(CACHE_CONTROL).unwrap(),
        "no-cache, no-store"
    );
    assert_eq!(response.headers().get(PRAGMA).unwrap(), "no-cache");
    assert_eq!(response.headers().get(EXPIRES).unwrap(), "0");
}

#[tokio::test]
async fn method_sensitive_policy_differentiates_get_and_post() {
    // Same route, verdict decided by method alone.
    let layer = CacheHeaders::new(Method::new(http::Method::GET));

    let service = layer.layer(service_fn(empty_ok));
    let get = service
        .oneshot(request(http::Method::GET, "/books"))
        .await
        .unwrap();
    assert_eq!(
        get.headers().get(CACHE_CONTROL).unwrap(),
        "max-age=31536000, public"
    );

    let service = layer.layer(service_fn(empty_ok));
    let post = service
        .oneshot(request(http::Method::POST, "/books"))
        .await
        .unwrap();
    assert_eq!(
        post.headers().get(CACHE_CONTROL).unwrap(),
        "no-cache, no-store"
    );
}

#[tokio::test]
async fn swapping_the_specification_flips_the_verdict() {
    // Identical middleware construction; only the injected policy differs.
    let permissive = CacheHeaders::new(Neutral::<Subject>::new());
    let restrictive = CacheHeaders::new(Neutral::<Subject>::new().not());

    let response = permissive
        .layer(service_fn(empty_ok))
        .oneshot(request(http::Method::GET, "/books"))
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(CACHE_CONTROL).unwrap(),
        "max-age=31536000, public"
    );

    let response = restrictive
        .layer(service_fn(empty_ok))
        .oneshot(request(http::Method::GET, "/books"))
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(CACHE_CONTROL).unwrap(),
        "no-cache, no-store"
    );
}

#[tokio::test]
async fn handler_set_headers_win_over_the_baseline() {
    let layer = CacheHeaders::new(Neutral::<Subject>::new());
    let service = layer.layer(service_fn(|_req: Request<()>| async {
        let mut response = Response::new(());
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static("private"));
        Ok::<_, Infallible>(response)
    }));

    let response = service
        .oneshot(request(http::Method::GET, "/books"))
        .await
        .unwrap();
    assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "private");
}

#[tokio::test]
async fn custom_header_policy_is_honored() {
    let policy = CacheHeaderPolicy::builder()
        .enabled_directive("cache-control", "max-age=60")
        .unwrap()
        .disabled_directive("cache-control", "no-store")
        .unwrap()
        .build();
    let layer = CacheHeaders::builder()
        .specification(Neutral::<Subject>::new())
        .policy(policy)
        .build();

    let response = layer
        .layer(service_fn(empty_ok))
        .oneshot(request(http::Method::GET, "/books"))
        .await
        .unwrap();
    assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "max-age=60");
}

#[tokio::test]
async fn upstream_faults_propagate_unmodified() {
    let layer = CacheHeaders::new(Neutral::<Subject>::new());
    let service = layer.layer(service_fn(|_req: Request<()>| async {
        Err::<Response<()>, _>(std::io::Error::other("handler exploded"))
    }));

    let error = service
        .oneshot(request(http::Method::GET, "/books"))
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "handler exploded");
}

#[tokio::test]
async fn non_cacheable_requests_still_reach_the_upstream() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream_hits = Arc::clone(&hits);
    let layer = CacheHeaders::new(Neutral::<Subject>::new().not());
    let service = layer.layer(service_fn(move |_req: Request<()>| {
        let hits = Arc::clone(&upstream_hits);
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Infallible>(Response::new(()))
        }
    }));

    service
        .oneshot(request(http::Method::POST, "/books"))
        .await
        .unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
