//! Request body decoding for the account endpoints.
//!
//! Bodies are streamed from the raw payload and decoded here rather than
//! through the `web::Json` or `web::Bytes` extractors, so oversized or
//! malformed bodies reach the handler and are answered with the same
//! envelope as a field validation failure.

use actix_web::http::StatusCode;
use actix_web::web;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;
use tracing::debug;

use crate::domain::{BODY_FIELD, FieldErrors};

/// Largest request body the account endpoints accept, in bytes.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Failure while collecting the request body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyReadError {
    /// The body grew past the configured limit.
    #[error("request body must not exceed {limit} bytes")]
    TooLarge { limit: usize },
    /// The client stream failed before the body was complete.
    #[error("request body could not be read")]
    Interrupted,
}

impl BodyReadError {
    /// HTTP status the failure is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Interrupted => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Single-entry mapping reported under the `body` field.
    pub fn to_field_errors(&self) -> FieldErrors {
        FieldErrors::single(BODY_FIELD, self.to_string())
    }
}

/// Collect `payload`, stopping as soon as it exceeds `limit` bytes.
pub async fn read_body(
    mut payload: web::Payload,
    limit: usize,
) -> Result<web::BytesMut, BodyReadError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| {
            debug!(error = %err, "request body stream failed");
            BodyReadError::Interrupted
        })?;
        if body.len() + chunk.len() > limit {
            debug!(limit, "request body rejected: too large");
            return Err(BodyReadError::TooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Decode `body` into the request DTO `D`, then validate it into `I`.
///
/// Both a body that does not parse and a DTO that fails validation come back
/// as a [`FieldErrors`] mapping.
pub fn decode_input<D, I>(body: &[u8]) -> Result<I, FieldErrors>
where
    D: DeserializeOwned,
    I: TryFrom<D, Error = FieldErrors>,
{
    let dto: D = serde_json::from_slice(body).map_err(|err| {
        debug!(error = %err, "request body rejected by decoder");
        format_decode_error(&err)
    })?;
    I::try_from(dto)
}

/// Turn a decoder failure into a generic single-entry field mapping.
pub fn format_decode_error(err: &serde_json::Error) -> FieldErrors {
    let reason = match err.classify() {
        Category::Syntax | Category::Eof => "request body must be valid JSON",
        Category::Data => "request body must be a JSON object with string fields",
        Category::Io => "request body could not be read",
    };
    FieldErrors::single(BODY_FIELD, reason)
}
