//! Authentication inputs.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port.

use zeroize::Zeroizing;

use super::validation::{FieldErrors, FieldViolation};
use super::{EmailAddress, EmailValidationError};

pub(crate) const EMAIL_FIELD: &str = "email";
pub(crate) const PASSWORD_FIELD: &str = "password";

/// Validated login credentials passed to the account service.
///
/// ## Invariants
/// - `email` is a normalised [`EmailAddress`].
/// - `password` is non-empty and keeps caller-provided whitespace. No length
///   rule applies so credentials created under older policies still work.
///
/// # Examples
/// ```
/// use accounts::domain::LoginInput;
///
/// let input = LoginInput::try_from_parts("Ada@Example.com", "secret").unwrap();
/// assert_eq!(input.email().as_ref(), "ada@example.com");
/// assert_eq!(input.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginInput {
    /// Construct credentials from raw inputs, reporting every offending field.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = parse_email(&mut errors, email);
        if password.is_empty() {
            errors.record(FieldViolation::Required {
                field: PASSWORD_FIELD,
            });
        }

        match email {
            Some(email) if errors.is_empty() => Ok(Self {
                email,
                password: Zeroizing::new(password.to_owned()),
            }),
            _ => Err(errors),
        }
    }

    /// Normalised email to authenticate.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password exactly as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Parse an email field, recording the reason it was rejected.
pub(crate) fn parse_email(errors: &mut FieldErrors, raw: &str) -> Option<EmailAddress> {
    match EmailAddress::new(raw) {
        Ok(email) => Some(email),
        Err(EmailValidationError::Empty) => {
            errors.record(FieldViolation::Required { field: EMAIL_FIELD });
            None
        }
        Err(EmailValidationError::Malformed) => {
            errors.record(FieldViolation::InvalidEmail { field: EMAIL_FIELD });
            None
        }
    }
}
