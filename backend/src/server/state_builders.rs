//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use accounts::domain::ports::{AccountService, PlaceholderTokenIssuer, TokenIssuer};
use accounts::inbound::http::state::HttpState;
use accounts::outbound::persistence::InMemoryAccountService;

/// Wire the account service and token issuer behind the HTTP state.
///
/// Accounts live in process memory, so every worker must share the same
/// state instance built once before the server factory runs.
pub(super) fn build_http_state() -> web::Data<HttpState> {
    let accounts: Arc<dyn AccountService> = Arc::new(InMemoryAccountService::default());
    let tokens: Arc<dyn TokenIssuer> = Arc::new(PlaceholderTokenIssuer);
    web::Data::new(HttpState::new(accounts, tokens))
}
