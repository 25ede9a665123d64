#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use urlite::application::services::ShortenerService;
use urlite::infrastructure::persistence::SqliteUrlRepository;
use urlite::state::AppState;

pub const TEST_BASE_URL: &str = "http://short.test";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    let shortener = Arc::new(ShortenerService::new(repository));
    AppState::new(shortener, TEST_BASE_URL.to_string())
}

pub fn create_test_repository(pool: SqlitePool) -> SqliteUrlRepository {
    SqliteUrlRepository::new(Arc::new(pool))
}

pub async fn seed_url(pool: &SqlitePool, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (long_url) VALUES (?1) RETURNING id")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
