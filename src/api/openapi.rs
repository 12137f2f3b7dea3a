//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::registration_handler;
use crate::domain::RegisterResponse;

/// OpenAPI documentation for the registration service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Assessment Platform Registration API",
        version = "0.1.0",
        description = "Credential registration service backing the assessment platform sign-up forms",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(registration_handler::register),
    components(
        schemas(
            registration_handler::RegisterRequest,
            RegisterResponse,
        )
    ),
    tags(
        (name = "Registration", description = "User account registration")
    )
)]
pub struct ApiDoc;
