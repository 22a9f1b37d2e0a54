use async_trait::async_trait;
use folio_core::{Neutral, Predicate, PredicateExt, PredicateResult};

/// Test predicate: cacheable when the subject starts with the prefix.
#[derive(Debug)]
struct StartsWith(&'static str);

#[async_trait]
impl Predicate for StartsWith {
    type Subject = String;

    async fn check(&self, subject: String) -> PredicateResult<String> {
        if subject.starts_with(self.0) {
            PredicateResult::Cacheable(subject)
        } else {
            PredicateResult::NonCacheable(subject)
        }
    }
}

fn is_cacheable<S>(result: &PredicateResult<S>) -> bool {
    matches!(result, PredicateResult::Cacheable(_))
}

#[tokio::test]
async fn neutral_is_always_cacheable() {
    let predicate = Neutral::<String>::new();
    assert!(is_cacheable(&predicate.check("anything".into()).await));
    assert!(is_cacheable(&predicate.check(String::new()).await));
}

#[tokio::test]
async fn not_inverts_the_verdict() {
    let predicate = StartsWith("/static").not();
    assert!(!is_cacheable(&predicate.check("/static/app.js".into()).await));
    assert!(is_cacheable(&predicate.check("/api/books".into()).await));
}

#[tokio::test]
async fn and_requires_both() {
    let predicate = StartsWith("/static").and(StartsWith("/static/fonts"));
    assert!(is_cacheable(&predicate.check("/static/fonts/a.woff".into()).await));
    assert!(!is_cacheable(&predicate.check("/static/app.js".into()).await));
    assert!(!is_cacheable(&predicate.check("/api/books".into()).await));
}

#[tokio::test]
async fn or_requires_either() {
    let predicate = StartsWith("/static").or(StartsWith("/content"));
    assert!(is_cacheable(&predicate.check("/static/app.js".into()).await));
    assert!(is_cacheable(&predicate.check("/content/cover.jpg".into()).await));
    assert!(!is_cacheable(&predicate.check("/api/books".into()).await));
}

#[tokio::test]
async fn verdict_hands_the_subject_back() {
    let predicate = StartsWith("/api").not();
    let subject = "/api/books?page=2".to_string();
    let result = predicate.check(subject.clone()).await;
    assert_eq!(result.into_subject(), subject);
}

#[tokio::test]
async fn boxed_chains_stay_swappable() {
    // Two policies with opposite verdicts behind the same trait object type.
    let permissive: Box<dyn Predicate<Subject = String> + Send + Sync> =
        Neutral::new().boxed();
    let restrictive: Box<dyn Predicate<Subject = String> + Send + Sync> =
        Neutral::new().not().boxed();

    assert!(is_cacheable(&permissive.check("/books".into()).await));
    assert!(!is_cacheable(&restrictive.check("/books".into()).await));
}
