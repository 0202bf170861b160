//! Port for issuing the token returned alongside an account.
//!
//! Handlers only see an opaque string, so real credential issuance can be
//! swapped in without touching the response contract.

use crate::domain::Account;

use super::define_port_error;

/// Token handed out by [`PlaceholderTokenIssuer`].
pub const PLACEHOLDER_TOKEN: &str = "token";

define_port_error! {
    /// Errors raised while issuing a token.
    pub enum TokenIssueError {
        /// The issuer could not produce a token.
        Issue { message: String } => "token issuance failed: {message}",
    }
}

/// Produces an opaque token for an authenticated or newly created account.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for `account`.
    fn issue(&self, account: &Account) -> Result<String, TokenIssueError>;
}

/// Issuer returning [`PLACEHOLDER_TOKEN`] for every account.
///
/// Stands in until genuine credential issuance is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderTokenIssuer;

impl TokenIssuer for PlaceholderTokenIssuer {
    fn issue(&self, _account: &Account) -> Result<String, TokenIssueError> {
        Ok(PLACEHOLDER_TOKEN.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, EmailAddress};
    use rstest::rstest;

    #[rstest]
    fn placeholder_issuer_returns_fixed_token() {
        let email = EmailAddress::new("ada@example.com").expect("valid email");
        let account = Account::new(AccountId::random(), "Ada", email, "Analyst");
        let token = PlaceholderTokenIssuer.issue(&account).expect("token");
        assert_eq!(token, PLACEHOLDER_TOKEN);
    }
}
