//! Registration and email-availability inputs.

use zeroize::Zeroizing;

use super::EmailAddress;
use super::auth::{PASSWORD_FIELD, parse_email};
use super::validation::{FieldErrors, FieldViolation, required_text};

const NAME_FIELD: &str = "name";
const OCCUPATION_FIELD: &str = "occupation";

/// Minimum number of characters accepted for a new password.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Validated registration request.
///
/// ## Invariants
/// - `name` and `occupation` are trimmed and non-empty.
/// - `email` is a normalised [`EmailAddress`].
/// - `password` has at least [`PASSWORD_MIN_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterInput {
    name: String,
    email: EmailAddress,
    occupation: String,
    password: Zeroizing<String>,
}

impl RegisterInput {
    /// Validate raw registration fields, reporting every offending field.
    ///
    /// # Examples
    /// ```
    /// use accounts::domain::RegisterInput;
    ///
    /// let errors = RegisterInput::try_from_parts("", "bad", "x", "1").unwrap_err();
    /// assert!(errors.get("name").is_some());
    /// assert!(errors.get("email").is_some());
    /// assert!(errors.get("password").is_some());
    /// assert!(errors.get("occupation").is_none());
    /// ```
    pub fn try_from_parts(
        name: &str,
        email: &str,
        occupation: &str,
        password: &str,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = required_text(&mut errors, NAME_FIELD, name);
        let email = parse_email(&mut errors, email);
        let occupation = required_text(&mut errors, OCCUPATION_FIELD, occupation);
        check_new_password(&mut errors, password);

        match (name, email, occupation) {
            (Some(name), Some(email), Some(occupation)) if errors.is_empty() => Ok(Self {
                name,
                email,
                occupation,
                password: Zeroizing::new(password.to_owned()),
            }),
            _ => Err(errors),
        }
    }

    /// Trimmed display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Normalised email to register.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Trimmed occupation.
    pub fn occupation(&self) -> &str {
        self.occupation.as_str()
    }

    /// Password exactly as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

fn check_new_password(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.record(FieldViolation::Required {
            field: PASSWORD_FIELD,
        });
    } else if password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.record(FieldViolation::TooShort {
            field: PASSWORD_FIELD,
            min: PASSWORD_MIN_LENGTH,
        });
    }
}

/// Validated email availability query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEmailInput {
    email: EmailAddress,
}

impl CheckEmailInput {
    /// Validate the raw email field.
    pub fn try_from_parts(email: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        parse_email(&mut errors, email)
            .map(|email| Self { email })
            .ok_or(errors)
    }

    /// Normalised email to look up.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
