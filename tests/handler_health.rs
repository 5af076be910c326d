mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use shorturl::domain::entities::UrlRecord;
use shorturl::domain::repositories::UrlRecordRepository;
use shorturl::error::AppError;
use shorturl::routes::app_router;
use shorturl::state::AppState;
use shorturl::utils::short_url::ShortUrlFormatter;
use std::sync::Arc;

/// Store that fails every call.
struct UnavailableRepository;

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl UrlRecordRepository for UnavailableRepository {
    async fn create(&self, _url: &str) -> Result<UrlRecord, AppError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn find_by_url(&self, _url: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn increment_and_touch(&self, _id: i64) -> Result<Option<UrlRecord>, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

fn unavailable_server() -> TestServer {
    let state = AppState::new(
        Arc::new(UnavailableRepository),
        ShortUrlFormatter::new(common::BASE_URL, "my"),
    );

    TestServer::new(app_router(state, "my")).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = unavailable_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}

#[tokio::test]
async fn test_storage_failures_map_to_internal_error() {
    let server = unavailable_server();

    let response = server
        .get("/shorten_simple")
        .add_query_param("url", "https://example.com")
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "internal_error"
    );

    server
        .get("/my/1")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    server
        .get("/stat")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
