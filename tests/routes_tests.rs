use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

/// Router over a lazy pool: none of the routes exercised here reach the
/// database, so no Postgres is needed.
fn build_app() -> Router {
    let cfg = roster::config::Config::default();
    let storage = roster::db::UserStorage::connect_lazy(&cfg.database.url())
        .expect("failed to build lazy pool");
    let state = roster::router::RosterState::new(storage);
    roster::router::roster_router(state)
}

#[tokio::test]
async fn index_returns_greeting() {
    let app = build_app();

    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], b"Welcome to Roster CRUD API");
}

#[tokio::test]
async fn create_user_with_empty_object_returns_structured_400() {
    let app = build_app();

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body).expect("response body was not utf-8");
    assert!(body_str.contains(r#""code":"INVALID_BODY""#));
}

#[tokio::test]
async fn create_user_with_malformed_json_returns_structured_400() {
    let app = build_app();

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name": "Alice", "#))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body).expect("response body was not utf-8");
    assert!(body_str.contains(r#""code":"INVALID_BODY""#));
}

#[tokio::test]
async fn create_user_without_content_type_returns_structured_400() {
    let app = build_app();

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .body(Body::from(r#"{"name":"Alice","email":"alice@example.com"}"#))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body).expect("response body was not utf-8");
    assert!(body_str.contains(r#""code":"INVALID_BODY""#));
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let app = build_app();

    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/nope")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
