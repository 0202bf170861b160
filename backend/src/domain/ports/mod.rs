//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_service;
mod password_hasher;
mod token_issuer;

#[cfg(test)]
pub use account_service::MockAccountService;
pub use account_service::{AccountService, AccountServiceError};
pub use password_hasher::{PasswordDigest, PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use token_issuer::MockTokenIssuer;
pub use token_issuer::{PLACEHOLDER_TOKEN, PlaceholderTokenIssuer, TokenIssueError, TokenIssuer};
