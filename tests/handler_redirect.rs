mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::redirect_handler;

fn redirect_server(state: shortlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/{short_code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::test_pool().await;
    common::create_test_mapping(&pool, "https://example.com/target?q=1", "abc123").await;
    let server = redirect_server(common::create_test_state(pool));

    let response = server.get("/abc123").await;

    response.assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);

    let location = response.header("location");
    assert_eq!(location.to_str().unwrap(), "https://example.com/target?q=1");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::test_pool().await;
    let server = redirect_server(common::create_test_state(pool));

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Short URL not found");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let pool = common::test_pool().await;
    common::create_test_mapping(&pool, "https://example.com/lower", "abcdef").await;
    common::create_test_mapping(&pool, "https://example.com/upper", "ABCDEF").await;
    let server = redirect_server(common::create_test_state(pool));

    let lower = server.get("/abcdef").await;
    let upper = server.get("/ABCDEF").await;
    let mixed = server.get("/AbCdEf").await;

    assert_eq!(
        lower.header("location").to_str().unwrap(),
        "https://example.com/lower"
    );
    assert_eq!(
        upper.header("location").to_str().unwrap(),
        "https://example.com/upper"
    );
    mixed.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_does_not_need_host_header() {
    let pool = common::test_pool().await;
    common::create_test_mapping(&pool, "https://example.com", "nohost").await;
    let server = redirect_server(common::create_test_state(pool));

    let response = server.get("/nohost").await;

    response.assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);
}
