//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountService, TokenIssuer};

/// Dependency bundle for the account handlers.
///
/// Built once at startup and cloned into each worker; the ports it holds are
/// responsible for their own synchronisation.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use accounts::domain::ports::PlaceholderTokenIssuer;
/// use accounts::inbound::http::state::HttpState;
/// use accounts::outbound::persistence::InMemoryAccountService;
///
/// let state = HttpState::new(
///     Arc::new(InMemoryAccountService::default()),
///     Arc::new(PlaceholderTokenIssuer),
/// );
/// let _accounts = state.accounts.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountService>,
    pub tokens: Arc<dyn TokenIssuer>,
}

impl HttpState {
    /// Bundle the account service and token issuer.
    pub fn new(accounts: Arc<dyn AccountService>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { accounts, tokens }
    }
}
