use std::sync::Arc;

mod support;

use alexatech_core::application::ports::session_revocation::SessionRevocationStore;
use alexatech_core::application::services::{ApplicationServices, Repositories};
use alexatech_core::presentation::http::routes::build_router;
use alexatech_core::presentation::http::state::HttpState;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use support::{
    FixedClock, InMemoryActivityRepo, InMemoryClientRepo, InMemoryKardexRepo,
    InMemoryProductRepo, InMemoryUserRepo, InMemoryWarehouseRepo, MockAuditRepo,
    PlainPasswordHasher, RecordingEventRepo, RecordingSessionStore, StaticTokenManager,
    UserBuilder,
};
use tower::ServiceExt;

fn test_app(sessions: Arc<RecordingSessionStore>) -> Router {
    let repos = Repositories {
        users: Arc::new(InMemoryUserRepo::with_users(vec![
            UserBuilder::new().id(1).username("admin1").build(),
        ])),
        clients: Arc::new(InMemoryClientRepo::new()),
        audit_logs: Arc::new(MockAuditRepo::empty()),
        activity: Arc::new(InMemoryActivityRepo::default()),
        events: Arc::new(RecordingEventRepo::default()),
        products: Arc::new(InMemoryProductRepo::new()),
        warehouses: Arc::new(InMemoryWarehouseRepo::new()),
        kardex: Arc::new(InMemoryKardexRepo::new()),
    };
    let services = Arc::new(ApplicationServices::new(
        repos,
        Arc::new(PlainPasswordHasher),
        Arc::new(StaticTokenManager),
        sessions,
        Arc::new(FixedClock),
    ));
    build_router(HttpState { services }, &[])
}

#[tokio::test]
async fn health_needs_no_authentication() {
    let app = test_app(Arc::new(RecordingSessionStore::default()));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_routes_reject_missing_and_bad_tokens() {
    let app = test_app(Arc::new(RecordingSessionStore::default()));

    let missing = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let bad = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/users")
                .header(header::AUTHORIZATION, "Bearer nonsense")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_reaches_the_user_listing() {
    let app = test_app(Arc::new(RecordingSessionStore::default()));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/users")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn revoked_sessions_are_turned_away() {
    let sessions = Arc::new(RecordingSessionStore::default());
    // The static token manager authenticates as user 1 / session-1.
    sessions.revoke("session-1").await.unwrap();
    let app = test_app(sessions);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/users")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_returns_token_and_user() {
    let app = test_app(Arc::new(RecordingSessionStore::default()));

    let payload = serde_json::json!({
        "username": "admin1",
        "password": "secret-password",
    });
    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["user"]["username"], "admin1");
    assert!(json["token"]["token"].as_str().is_some());
}

#[tokio::test]
async fn unknown_client_id_maps_to_404() {
    let app = test_app(Arc::new(RecordingSessionStore::default()));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/clients/42")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Not Found");
}
