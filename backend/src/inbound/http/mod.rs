//! HTTP inbound adapter exposing the account endpoints.

use actix_web::http::StatusCode;
use actix_web::web;

pub mod accounts;
pub mod decode;
pub mod envelope;
pub mod health;
pub mod state;

pub use envelope::{ApiFailure, ApiResult};

use self::accounts::{check_email_availability, login, register};

/// Register the account handlers on a scope or app.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use accounts::inbound::http::account_routes;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(account_routes));
/// ```
pub fn account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(login)
        .service(check_email_availability);
}

/// Fallback for unmatched requests so they are answered with an envelope too.
pub async fn route_not_found() -> ApiResult<actix_web::HttpResponse> {
    Err(ApiFailure::new(StatusCode::NOT_FOUND, "Not Found"))
}
