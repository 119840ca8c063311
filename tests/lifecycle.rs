mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use axum_test::TestServer;
use serde_json::json;
use tower::ServiceExt;
use urlmap::routes::{app_router, router};

#[tokio::test]
async fn test_full_mapping_lifecycle() {
    let (state, _repository) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    server.get("/urls").await.assert_status_not_found();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://www.example.com/United_Kingdom/London/Population" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let short_url = response.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();
    let code = common::code_from_short_url(&short_url);

    let response = server.get(&format!("/expand/{code}")).await;
    response.assert_status_ok();
    let created_at = response.json::<serde_json::Value>()["created_at"].clone();

    let response = server.get(&format!("/r/{code}")).await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://www.example.com/United_Kingdom/London/Population"
    );

    let response = server.get("/urls").await;
    response.assert_status_ok();
    let items = response.json::<serde_json::Value>();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["short_url"], short_url.as_str());

    server
        .put(&format!("/update/{code}"))
        .json(&json!({ "url": "https://www.example.com/v2" }))
        .await
        .assert_status_ok();

    let response = server.get(&format!("/expand/{code}")).await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://www.example.com/v2");
    assert_eq!(json["created_at"], created_at);

    let response = server.get(&format!("/r/{code}")).await;
    assert_eq!(response.header("location"), "https://www.example.com/v2");

    server
        .delete(&format!("/delete/{code}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/expand/{code}"))
        .await
        .assert_status_not_found();
    server
        .get(&format!("/r/{code}"))
        .await
        .assert_status_not_found();
    server.get("/urls").await.assert_status_not_found();
}

#[tokio::test]
async fn test_trailing_slash_is_ignored() {
    let (state, repository) = common::create_test_state();
    common::create_test_mapping(&repository, "Zh8Qkr", "https://www.google.com").await;

    let app = app_router(state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/expand/Zh8Qkr/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["original_url"], "https://www.google.com");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/r/Zh8Qkr/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://www.google.com"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (state, _repository) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    server.get("/nope").await.assert_status_not_found();
}
