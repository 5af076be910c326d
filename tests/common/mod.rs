#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use shorturl::domain::repositories::UrlRecordRepository;
use shorturl::infrastructure::persistence::MemoryUrlRecordRepository;
use shorturl::routes::app_router;
use shorturl::state::AppState;
use shorturl::utils::short_url::{ShortUrlFormatter, extract_short_id};
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:8080";

pub fn formatter() -> ShortUrlFormatter {
    ShortUrlFormatter::new(BASE_URL, "my")
}

/// Beginning of every short URL handed out by the test server.
pub fn short_url_prefix() -> String {
    formatter().url_prefix()
}

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRecordRepository>) {
    let repository = Arc::new(MemoryUrlRecordRepository::new());
    let shared: Arc<dyn UrlRecordRepository> = repository.clone();

    let state = AppState::new(shared, formatter());

    (state, repository)
}

pub fn create_test_server() -> TestServer {
    let (state, _repository) = create_test_state();
    TestServer::new(app_router(state, "my")).unwrap()
}

/// Extracts the id from a full short URL (`http://host:port/my/{id}`).
pub fn extract_id(short_url: &str) -> &str {
    extract_short_id(short_url)
}

/// Shortens `url` through `GET /shorten_simple` and returns the short URL.
pub async fn shorten_simple(server: &TestServer, url: &str) -> String {
    let response = server
        .get("/shorten_simple")
        .add_query_param("url", url)
        .await;

    response.assert_status_ok();
    response.json::<Value>()["shortUrl"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Shortens `url` through `POST /shorten` and returns the short URL.
pub async fn shorten_json(server: &TestServer, url: &str) -> String {
    let response = server.post("/shorten").json(&json!({ "url": url })).await;

    response.assert_status_ok();
    response.json::<Value>()["shortUrl"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Finds the `/stat` entry for `short_url`.
pub async fn find_stat(server: &TestServer, short_url: &str) -> Option<Value> {
    let response = server.get("/stat").await;
    response.assert_status_ok();

    response
        .json::<Vec<Value>>()
        .into_iter()
        .find(|entry| entry["shortUrl"] == short_url)
}
