//! Field-level validation failures collected while building domain inputs.
//!
//! Input constructors check every field before giving up so callers receive
//! the complete mapping of offending fields in one response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Field name used when the request body itself could not be decoded.
pub const BODY_FIELD: &str = "body";

/// A single constraint violated by one input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldViolation {
    /// The field was missing or blank once trimmed.
    #[error("{field} is required")]
    Required { field: &'static str },
    /// The field does not look like an email address.
    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str },
    /// The field is shorter than the permitted minimum.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
}

impl FieldViolation {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::InvalidEmail { field }
            | Self::TooShort { field, .. } => field,
        }
    }
}

/// Mapping from field name to a human-readable reason.
///
/// Serialises as a flat JSON object, e.g. `{"email":"email is required"}`.
///
/// # Examples
/// ```
/// use accounts::domain::{FieldErrors, FieldViolation};
///
/// let mut errors = FieldErrors::default();
/// errors.record(FieldViolation::Required { field: "name" });
/// assert_eq!(errors.get("name"), Some("name is required"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Record a violation, keeping the first reason reported for a field.
    pub fn record(&mut self, violation: FieldViolation) {
        self.0
            .entry(violation.field().to_owned())
            .or_insert_with(|| violation.to_string());
    }

    /// Build a mapping holding a single entry.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.0.insert(field.into(), message.into());
        errors
    }

    /// Reason recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether no field has been flagged.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of flagged fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(field, reason)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Trim `value` and flag it as missing when nothing is left.
pub(crate) fn required_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.record(FieldViolation::Required { field });
        return None;
    }
    Some(trimmed.to_owned())
}
