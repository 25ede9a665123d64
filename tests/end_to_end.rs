mod common;

use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;
use urlite::api::handlers::{health_handler, redirect_handler, shorten_handler};

fn full_app(pool: SqlitePool) -> Router {
    let state = common::create_test_state(pool);
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_shorten_then_resolve(pool: SqlitePool) {
    let server = TestServer::new(full_app(pool)).unwrap();

    // First URL gets identifier 1 and the single-character code "1".
    let shortened = server
        .post("/shorten")
        .json(&json!({ "url": "http://example.com/page" }))
        .await;
    shortened.assert_status(StatusCode::CREATED);
    let body = shortened.json::<serde_json::Value>();
    assert_eq!(body["short_code"], "1");

    // Resolving the code redirects to the original URL.
    let redirect = server.get("/1").await;
    redirect.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        redirect.header("location").to_str().unwrap(),
        "http://example.com/page"
    );

    // Shortening the same URL again returns the same code.
    let again = server
        .post("/shorten")
        .json(&json!({ "url": "http://example.com/page" }))
        .await
        .json::<serde_json::Value>();
    assert_eq!(again["short_code"], "1");

    // A different URL gets the next identifier.
    let other = server
        .post("/shorten")
        .json(&json!({ "url": "http://example.com/other" }))
        .await
        .json::<serde_json::Value>();
    assert_eq!(other["short_code"], "2");

    let other_redirect = server.get("/2").await;
    other_redirect.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        other_redirect.header("location").to_str().unwrap(),
        "http://example.com/other"
    );
}

#[sqlx::test]
async fn test_shorten_and_health_are_not_shadowed_by_redirect(pool: SqlitePool) {
    let server = TestServer::new(full_app(pool)).unwrap();

    // "health" is a valid base62 string; the fixed route must win.
    let response = server.get("/health").await;
    response.assert_status_ok();
}
