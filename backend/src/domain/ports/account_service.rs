//! Driving port for account registration, login, and email availability.
//!
//! Inbound adapters call this port without knowing which storage, hashing,
//! or uniqueness rules back it. HTTP handler tests substitute a double.

use async_trait::async_trait;

use crate::domain::{Account, CheckEmailInput, LoginInput, RegisterInput};

use super::define_port_error;

define_port_error! {
    /// Failures reported by account service implementations.
    pub enum AccountServiceError {
        /// Another account already holds the email.
        EmailTaken => "email has already been registered",
        /// No account is registered under the email.
        UnknownEmail => "no user found on that email",
        /// The password does not match the stored credential.
        WrongPassword => "wrong password",
        /// Backing storage failed.
        Storage { message: String } => "account storage failed: {message}",
    }
}

/// Account use-cases consumed by the HTTP adapter.
///
/// Implementations are shared across worker threads and must tolerate
/// concurrent calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account from validated registration data.
    async fn register_account(&self, input: &RegisterInput) -> Result<Account, AccountServiceError>;

    /// Verify credentials and return the matching account.
    async fn authenticate(&self, input: &LoginInput) -> Result<Account, AccountServiceError>;

    /// Report whether no account currently holds the email.
    async fn is_email_available(
        &self,
        input: &CheckEmailInput,
    ) -> Result<bool, AccountServiceError>;
}
