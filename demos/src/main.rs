//! Axum Integration Demo
//!
//! Wires the cache header middleware into an axum server with the
//! static-assets specification, and shows the search-criteria model
//! producing indexer queries.
//!
//! Run:
//!   cargo run -p folio-demos --bin axum-demo
//!
//! Try it:
//!   curl -v http://localhost:3000/static/app.js        # cache enabled
//!   curl -v http://localhost:3000/app.js?h=1a2b3c      # hashed asset, cache enabled
//!   curl -v http://localhost:3000/api/books            # cache disabled
//!   curl -v -X POST http://localhost:3000/api/books/1/search  # cache disabled
//!   curl -v -X OPTIONS http://localhost:3000/api/books # untouched

use std::sync::Arc;

use axum::{Json, Router, extract::Path, routing::{get, post}};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use folio_http::policy::static_assets;
use folio_search::{Author, BookSearchCriteria, SearchCriteria};
use folio_tower::CacheHeaders;

#[derive(Debug, Clone, Serialize)]
struct Book {
    id: u64,
    title: String,
    year: u16,
}

fn shelf() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "The Way of Kings".into(),
            year: 2010,
        },
        Book {
            id: 2,
            title: "Mistborn & Elantris".into(),
            year: 2006,
        },
    ]
}

async fn list_books() -> Json<Vec<Book>> {
    Json(shelf())
}

/// Builds the search criteria for one book and returns the normalized
/// indexer query. In the full system this is where indexer clients take
/// over.
async fn search_book(Path(id): Path<u64>) -> Json<String> {
    let author = Arc::new(Author::new(1, "Brandon Sanderson"));
    let book = shelf()
        .into_iter()
        .find(|book| book.id == id)
        .unwrap_or_else(|| shelf().remove(0));
    let criteria = BookSearchCriteria::new(author, book.title, book.year);
    tracing::info!(criteria = %criteria, "dispatching search");
    Json(criteria.query())
}

async fn app_js() -> &'static str {
    "console.log('folio');"
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = Router::new()
        .route("/api/books", get(list_books))
        .route("/api/books/{id}/search", post(search_book))
        .route("/static/app.js", get(app_js))
        .route("/app.js", get(app_js))
        .layer(CacheHeaders::new(static_assets::<axum::body::Body>()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .expect("bind 127.0.0.1:3000");
    tracing::info!("listening on http://127.0.0.1:3000");
    axum::serve(listener, app).await.expect("server error");
}
