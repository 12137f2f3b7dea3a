//! Registration handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::RegisterResponse;
use crate::errors::AppResult;

/// User registration request.
///
/// Fields default to empty strings so an absent field reaches the
/// validator and reports the same message as an empty one.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Display identifier, not required to be unique
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// Email address, the uniqueness key
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Plaintext secret, in transit only; never stored or logged
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    #[schema(example = "secret1")]
    pub password: String,
}

/// Create registration routes.
///
/// Method routing also yields `405 Method Not Allowed` with an
/// `Allow: POST` header for non-POST requests to this path.
pub fn registration_routes() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/register",
    tag = "Registration",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Missing fields or email already registered"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Persistence or hashing failure")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let account = state
        .registration
        .register(payload.username, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::from(account))))
}
