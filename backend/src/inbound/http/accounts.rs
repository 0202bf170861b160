//! Account API handlers.
//!
//! ```text
//! POST /api/v1/users {"name":"Ada","email":"ada@example.com","occupation":"Analyst",
//!                     "password":"s3cret-pw"}
//! POST /api/v1/sessions {"email":"ada@example.com","password":"s3cret-pw"}
//! POST /api/v1/email_checkers {"email":"ada@example.com"}
//! ```
//!
//! Each handler reads and decodes the raw payload, validates it into a
//! domain input, delegates to the
//! [`AccountService`](crate::domain::ports::AccountService) port, and wraps the outcome in the response envelope. Failure mapping
//! differs per endpoint: registration never echoes the service error, login
//! does, and the email check reports a generic reason.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::domain::{AccountView, CheckEmailInput, FieldErrors, LoginInput, RegisterInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::decode::{MAX_BODY_BYTES, decode_input, read_body};
use crate::inbound::http::envelope::{ApiFailure, success};
use crate::inbound::http::state::HttpState;

const REGISTER_FAILED: &str = "Failed to register account";
const ACCOUNT_REGISTERED: &str = "Account has been registered";
const LOGIN_FAILED: &str = "Login Failed!";
const LOGIN_SUCCEEDED: &str = "Login Successfully!";
// Shared by the validation and service failure paths of the email check.
const EMAIL_CHECK_FAILED: &str = "Email not found!";
const EMAIL_AVAILABLE: &str = "Email is available";
const EMAIL_REGISTERED: &str = "Email has been registered";
const SERVER_ERROR: &str = "Server Error";

/// Registration request body for `POST /api/v1/users`.
///
/// Absent fields decode as empty strings and are reported by validation.
#[derive(Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Analyst")]
    pub occupation: String,
    #[schema(example = "s3cret-pw")]
    pub password: String,
}

impl TryFrom<RegisterRequest> for RegisterInput {
    type Error = FieldErrors;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.name, &value.email, &value.occupation, &value.password)
    }
}

/// Login request body for `POST /api/v1/sessions`.
#[derive(Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "s3cret-pw")]
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginInput {
    type Error = FieldErrors;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

/// Availability request body for `POST /api/v1/email_checkers`.
#[derive(Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CheckEmailRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl TryFrom<CheckEmailRequest> for CheckEmailInput {
    type Error = FieldErrors;

    fn try_from(value: CheckEmailRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email)
    }
}

/// `data` payload of a successful availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailAvailability {
    pub is_available: bool,
}

/// Read, decode, and validate a request body, failing with `message`.
async fn decode_request<D, I>(payload: web::Payload, message: &'static str) -> ApiResult<I>
where
    D: DeserializeOwned,
    I: TryFrom<D, Error = FieldErrors>,
{
    let body = read_body(payload, MAX_BODY_BYTES)
        .await
        .map_err(|err| ApiFailure::field_errors(err.status(), message, &err.to_field_errors()))?;
    decode_input::<D, I>(&body).map_err(|errors| ApiFailure::invalid_input(message, &errors))
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account registered; `data` holds the account view"),
        (status = 400, description = "Account service refused the registration; `data` is null"),
        (status = 413, description = "Body too large; `data.errors.body` gives the limit"),
        (status = 422, description = "Invalid body; `data.errors` maps fields to reasons")
    ),
    tags = ["accounts"],
    operation_id = "registerAccount"
)]
#[post("/users")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let input = decode_request::<RegisterRequest, RegisterInput>(payload, REGISTER_FAILED).await?;

    // The service error stays in the logs; callers only learn that it failed.
    let account = state.accounts.register_account(&input).await.map_err(|err| {
        warn!(error = %err, "account registration failed");
        ApiFailure::new(StatusCode::BAD_REQUEST, REGISTER_FAILED)
    })?;
    let token = state.tokens.issue(&account).map_err(|err| {
        error!(
            error = %err,
            account_id = %account.id(),
            "token issuance failed after registration"
        );
        ApiFailure::new(StatusCode::BAD_REQUEST, REGISTER_FAILED)
    })?;

    info!(account_id = %account.id(), "account registered");
    Ok(success(ACCOUNT_REGISTERED, AccountView::new(&account, token)))
}

/// Authenticate with email and password.
#[utoipa::path(
    post,
    path = "/api/v1/sessions",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated; `data` holds the account view"),
        (status = 413, description = "Body too large; `data.errors.body` gives the limit"),
        (status = 422, description = "Invalid body or credentials; `data.errors` explains why")
    ),
    tags = ["accounts"],
    operation_id = "login"
)]
#[post("/sessions")]
pub async fn login(state: web::Data<HttpState>, payload: web::Payload) -> ApiResult<HttpResponse> {
    let input = decode_request::<LoginRequest, LoginInput>(payload, LOGIN_FAILED).await?;

    let account = state.accounts.authenticate(&input).await.map_err(|err| {
        warn!(error = %err, "login rejected");
        ApiFailure::rejected(LOGIN_FAILED, err.to_string())
    })?;
    let token = state.tokens.issue(&account).map_err(|err| {
        error!(error = %err, account_id = %account.id(), "token issuance failed after login");
        ApiFailure::rejected(LOGIN_FAILED, err.to_string())
    })?;

    info!(account_id = %account.id(), "login succeeded");
    Ok(success(LOGIN_SUCCEEDED, AccountView::new(&account, token)))
}

/// Report whether an email can still be registered.
#[utoipa::path(
    post,
    path = "/api/v1/email_checkers",
    request_body = CheckEmailRequest,
    responses(
        (status = 200, description = "Checked; `data.is_available` holds the answer"),
        (status = 413, description = "Body too large; `data.errors.body` gives the limit"),
        (status = 422, description = "Invalid body or service failure")
    ),
    tags = ["accounts"],
    operation_id = "checkEmailAvailability"
)]
#[post("/email_checkers")]
pub async fn check_email_availability(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let input =
        decode_request::<CheckEmailRequest, CheckEmailInput>(payload, EMAIL_CHECK_FAILED).await?;

    let is_available = state.accounts.is_email_available(&input).await.map_err(|err| {
        error!(error = %err, "email availability check failed");
        ApiFailure::rejected(EMAIL_CHECK_FAILED, SERVER_ERROR)
    })?;

    let message = if is_available {
        EMAIL_AVAILABLE
    } else {
        EMAIL_REGISTERED
    };
    Ok(success(message, EmailAvailability { is_available }))
}

#[cfg(test)]
mod tests;
