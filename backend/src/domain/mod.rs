//! Domain primitives and inputs for account registration and login.
//!
//! Purpose: define strongly typed values used by the HTTP adapter and the
//! account service ports. Types validate on construction so adapters never
//! pass unchecked strings across the hexagon boundary.
//!
//! Public surface:
//! - `Account`, `AccountId`, `AccountView`: service output and its projection.
//! - `EmailAddress`: normalised, syntax-checked email.
//! - `RegisterInput`, `LoginInput`, `CheckEmailInput`: validated requests.
//! - `FieldErrors`: field name to reason mapping for rejected input.

pub mod account;
pub mod auth;
pub mod email;
pub mod ports;
pub mod registration;
pub mod validation;

pub use self::account::{Account, AccountId, AccountView};
pub use self::auth::LoginInput;
pub use self::email::{EmailAddress, EmailValidationError};
pub use self::registration::{CheckEmailInput, PASSWORD_MIN_LENGTH, RegisterInput};
pub use self::validation::{BODY_FIELD, FieldErrors, FieldViolation};
