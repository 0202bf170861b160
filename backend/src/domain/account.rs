//! Account records and the projection returned to API callers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::EmailAddress;

/// Stable account identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Account as produced by an account service.
///
/// The HTTP layer only reads the fields it needs to build an [`AccountView`];
/// credentials stay with the service that owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: String,
    email: EmailAddress,
    occupation: String,
}

impl Account {
    /// Assemble an account from already validated parts.
    pub fn new(
        id: AccountId,
        name: impl Into<String>,
        email: EmailAddress,
        occupation: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            occupation: occupation.into(),
        }
    }

    /// Identifier assigned by the account service.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Display name given at registration.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Normalised email the account is registered under.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Occupation given at registration.
    pub fn occupation(&self) -> &str {
        self.occupation.as_str()
    }
}

/// Read-only projection of an [`Account`] plus the token issued for it.
///
/// # Examples
/// ```
/// use accounts::domain::{Account, AccountId, AccountView, EmailAddress};
///
/// let email = EmailAddress::new("ada@example.com").unwrap();
/// let account = Account::new(AccountId::random(), "Ada", email, "Analyst");
/// let view = AccountView::new(&account, "token");
/// assert_eq!(view.email, "ada@example.com");
/// assert_eq!(view.token, "token");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountView {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Analyst")]
    pub occupation: String,
    #[schema(example = "token")]
    pub token: String,
}

impl AccountView {
    /// Project `account` together with an issued `token`.
    pub fn new(account: &Account, token: impl Into<String>) -> Self {
        Self {
            id: account.id().to_string(),
            name: account.name().to_owned(),
            email: account.email().to_string(),
            occupation: account.occupation().to_owned(),
            token: token.into(),
        }
    }
}
