//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the account and health endpoints together with the
//! request and payload schemas they exchange. The document backs Swagger UI
//! in debug builds and is printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{AccountView, FieldErrors};
use crate::inbound::http::accounts::{
    CheckEmailRequest, EmailAvailability, LoginRequest, RegisterRequest,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts API",
        description = "Account registration, login, and email availability checks.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::check_email_availability,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        CheckEmailRequest,
        AccountView,
        EmailAvailability,
        FieldErrors
    )),
    tags(
        (name = "accounts", description = "Account registration and authentication"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
