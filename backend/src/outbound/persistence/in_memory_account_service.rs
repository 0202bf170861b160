//! In-memory `AccountService` adapter.
//!
//! Accounts live for the lifetime of the process. The adapter enforces email
//! uniqueness and credential checks so the HTTP surface behaves the same as
//! it would against a database-backed service.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::ports::{AccountService, AccountServiceError, PasswordDigest, PasswordHasher};
use crate::domain::{Account, AccountId, CheckEmailInput, EmailAddress, LoginInput, RegisterInput};
use crate::outbound::hashing::Argon2PasswordHasher;

#[derive(Debug, Clone)]
struct StoredAccount {
    account: Account,
    password: PasswordDigest,
}

/// Process-local account store keyed by normalised email.
pub struct InMemoryAccountService {
    accounts: RwLock<HashMap<EmailAddress, StoredAccount>>,
    hasher: Arc<dyn PasswordHasher>,
}

impl Default for InMemoryAccountService {
    fn default() -> Self {
        Self::new(Arc::new(Argon2PasswordHasher))
    }
}

impl InMemoryAccountService {
    /// Create an empty store using `hasher` for credentials.
    pub fn new(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            hasher,
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountService for InMemoryAccountService {
    async fn register_account(
        &self,
        input: &RegisterInput,
    ) -> Result<Account, AccountServiceError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(input.email()) {
            debug!(email = %input.email(), "registration rejected: email taken");
            return Err(AccountServiceError::email_taken());
        }

        let account = Account::new(
            AccountId::random(),
            input.name(),
            input.email().clone(),
            input.occupation(),
        );
        let password = self.hasher.hash(input.password()).map_err(|err| {
            warn!(error = %err, "password hashing failed");
            AccountServiceError::storage(err.to_string())
        })?;
        let stored = StoredAccount {
            account: account.clone(),
            password,
        };
        accounts.insert(input.email().clone(), stored);
        debug!(account_id = %account.id(), total = accounts.len(), "account stored");
        Ok(account)
    }

    async fn authenticate(&self, input: &LoginInput) -> Result<Account, AccountServiceError> {
        let accounts = self.accounts.read().await;
        let stored = accounts
            .get(input.email())
            .ok_or_else(AccountServiceError::unknown_email)?;
        if !self.hasher.verify(input.password(), &stored.password) {
            return Err(AccountServiceError::wrong_password());
        }
        Ok(stored.account.clone())
    }

    async fn is_email_available(
        &self,
        input: &CheckEmailInput,
    ) -> Result<bool, AccountServiceError> {
        Ok(!self.accounts.read().await.contains_key(input.email()))
    }
}
