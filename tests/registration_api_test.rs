//! Integration tests for the HTTP boundary.
//!
//! The router is exercised with `tower::ServiceExt::oneshot` against a
//! stub registration service and a mock database backend, covering the
//! status codes and body shapes of the /register contract.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use assessauth::api::{create_router, AppState};
use assessauth::domain::UserAccount;
use assessauth::errors::{AppError, AppResult};
use assessauth::infra::Database;
use assessauth::services::RegistrationService;

/// Stub outcomes for the registration service
enum StubOutcome {
    Created(Uuid),
    Duplicate,
    StorageDown,
}

struct StubRegistration {
    outcome: StubOutcome,
}

#[async_trait]
impl RegistrationService for StubRegistration {
    async fn register(
        &self,
        username: String,
        email: String,
        _password: String,
    ) -> AppResult<UserAccount> {
        match &self.outcome {
            StubOutcome::Created(id) => Ok(UserAccount::new(
                *id,
                username,
                email,
                "$argon2id$v=19$stub".to_string(),
            )),
            StubOutcome::Duplicate => Err(AppError::conflict("User")),
            StubOutcome::StorageDown => Err(AppError::Database(sea_orm::DbErr::Custom(
                "connection refused".into(),
            ))),
        }
    }
}

fn test_router(outcome: StubOutcome) -> axum::Router {
    let database = Arc::new(Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    ));
    let state = AppState::new(Arc::new(StubRegistration { outcome }), database);
    create_router(state)
}

fn register_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn register_returns_created_with_user_id() {
    let id = Uuid::new_v4();
    let app = test_router(StubOutcome::Created(id));

    let response = app
        .oneshot(register_request(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret1"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["userId"], id.to_string());
}

#[tokio::test]
async fn register_rejects_empty_username() {
    let app = test_router(StubOutcome::Created(Uuid::new_v4()));

    let response = app
        .oneshot(register_request(json!({
            "username": "",
            "email": "a@b.com",
            "password": "pw"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn register_rejects_absent_password_field() {
    let app = test_router(StubOutcome::Created(Uuid::new_v4()));

    // Field missing from the body entirely, not just empty
    let response = app
        .oneshot(register_request(json!({
            "username": "alice",
            "email": "a@b.com"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn duplicate_email_maps_to_bad_request() {
    let app = test_router(StubOutcome::Duplicate);

    let response = app
        .oneshot(register_request(json!({
            "username": "bob",
            "email": "alice@example.com",
            "password": "other"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn non_post_method_gets_allow_header() {
    let app = test_router(StubOutcome::Created(Uuid::new_v4()));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/register")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response
        .headers()
        .get(header::ALLOW)
        .expect("Allow header present")
        .to_str()
        .unwrap();
    assert!(allow.contains("POST"));
}

#[tokio::test]
async fn storage_failure_maps_to_internal_server_error() {
    let app = test_router(StubOutcome::StorageDown);

    let response = app
        .oneshot(register_request(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret1"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    // Internal details are never echoed to the caller
    assert_eq!(body["message"], "Internal server error");
}
