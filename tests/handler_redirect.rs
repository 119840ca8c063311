mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use urlmap::api::handlers::{redirect_handler, shorten_handler};

fn make_server() -> (
    TestServer,
    std::sync::Arc<urlmap::infrastructure::persistence::MemoryMappingRepository>,
) {
    let (state, repository) = common::create_test_state();
    let app = Router::new()
        .route("/r/{code}", get(redirect_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repository)
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, repository) = make_server();
    common::create_test_mapping(&repository, "redir1", "https://example.com/target").await;

    let response = server.get("/r/redir1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_keeps_query_and_fragment() {
    let (server, repository) = make_server();
    common::create_test_mapping(
        &repository,
        "redir2",
        "https://example.com/search?q=rust&page=2#results",
    )
    .await;

    let response = server.get("/r/redir2").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/search?q=rust&page=2#results"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repository) = make_server();

    let response = server.get("/r/nope42").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Short URL not found");
}

#[tokio::test]
async fn test_redirect_does_not_match_bare_code() {
    let (server, repository) = make_server();
    common::create_test_mapping(&repository, "redir3", "https://example.com").await;

    server.get("/redir3").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_encodes_non_ascii_target() {
    let (state, _repository) = common::create_test_state();
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/r/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://ex\u{e4}mple.com/caf\u{e9}?q=\u{e9}t\u{e9}" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let short_url = response.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();
    let code = common::code_from_short_url(&short_url);

    let response = server.get(&format!("/r/{code}")).await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert!(location.as_bytes().is_ascii());
    assert_eq!(
        location,
        "https://xn--exmple-cua.com/caf%C3%A9?q=%C3%A9t%C3%A9"
    );
}
