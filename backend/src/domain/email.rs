//! Email address primitive.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned by [`EmailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailValidationError {
    /// The address was blank once trimmed.
    #[error("email must not be empty")]
    Empty,
    /// The address is not of the form `local@domain.tld`.
    #[error("email must be a valid email address")]
    Malformed,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@.]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Normalised email address.
///
/// ## Invariants
/// - Surrounding whitespace is removed and the address is lower-cased, so
///   uniqueness checks are case-insensitive.
/// - The address matches `local@domain.tld`.
///
/// # Examples
/// ```
/// use accounts::domain::EmailAddress;
///
/// let email = EmailAddress::new("  Ada@Example.COM ").unwrap();
/// assert_eq!(email.as_ref(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalise an email address.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if !email_regex().is_match(trimmed) {
            return Err(EmailValidationError::Malformed);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Borrow the normalised address.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
