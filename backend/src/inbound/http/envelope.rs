//! Uniform response envelope for every HTTP response this adapter writes.
//!
//! Bodies always have the shape `{"message", "code", "status", "data"}`,
//! where `code` mirrors the HTTP status and `data` is `null` when a path has
//! nothing to return. Handlers produce successes with [`success`] and
//! failures by returning an [`ApiFailure`], whose [`ResponseError`] impl
//! renders the same envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::FieldErrors;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiFailure>;

/// Outcome flag carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Single outbound body shape for every endpoint.
///
/// # Examples
/// ```
/// use accounts::inbound::http::envelope::{EnvelopeStatus, ResponseEnvelope};
///
/// let envelope = ResponseEnvelope::success("ok", 42);
/// assert_eq!(envelope.code, 200);
/// assert_eq!(envelope.status, EnvelopeStatus::Success);
/// assert_eq!(envelope.data, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T = Value> {
    pub message: String,
    pub code: u16,
    pub status: EnvelopeStatus,
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    /// Envelope for a `200 OK` response carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            code: StatusCode::OK.as_u16(),
            status: EnvelopeStatus::Success,
            data: Some(data),
        }
    }

    /// Envelope for a failed request answered with `status`.
    pub fn failure(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            code: status.as_u16(),
            status: EnvelopeStatus::Error,
            data,
        }
    }
}

/// Build a `200 OK` response wrapping `data` in the envelope.
pub fn success<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Ok().json(ResponseEnvelope::success(message, data))
}

/// Failure returned by handlers and rendered as an error envelope.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiFailure {
    status: StatusCode,
    message: String,
    data: Option<Value>,
}

impl ApiFailure {
    /// Failure with `data: null`.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }

    /// Attach a `data` payload.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// `422` failure carrying the field-error mapping as `data.errors`.
    pub fn invalid_input(message: impl Into<String>, errors: &FieldErrors) -> Self {
        Self::field_errors(StatusCode::UNPROCESSABLE_ENTITY, message, errors)
    }

    /// Failure answered with `status` carrying `errors` as `data.errors`.
    pub fn field_errors(
        status: StatusCode,
        message: impl Into<String>,
        errors: &FieldErrors,
    ) -> Self {
        Self::new(status, message).with_data(json!({ "errors": errors }))
    }

    /// `422` failure carrying a plain reason as `data.errors`.
    pub fn rejected(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
            .with_data(json!({ "errors": reason.into() }))
    }

    /// HTTP status the failure is answered with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Envelope `message`.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Envelope `data`, if any.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

impl ResponseError for ApiFailure {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        let envelope =
            ResponseEnvelope::failure(self.status, self.message.clone(), self.data.clone());
        HttpResponse::build(self.status).json(envelope)
    }
}
