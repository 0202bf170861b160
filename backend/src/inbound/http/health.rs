//! Liveness and readiness probes for orchestrators and load balancers.
//!
//! Probe bodies use the same envelope as the account endpoints so clients
//! can parse every response from this service the same way.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpResponse, get, web};

use crate::inbound::http::envelope::ResponseEnvelope;

/// Readiness and liveness flags shared with the server bootstrap.
#[derive(Debug)]
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Start live but not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag the server as accepting traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness so orchestrators restart the process.
    #[cfg(test)]
    pub(crate) fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether the readiness probe should pass.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether the liveness probe should pass.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

fn probe_response(probe_ok: bool, ok_message: &str, failed_message: &str) -> HttpResponse {
    let (status, envelope): (_, ResponseEnvelope) = if probe_ok {
        (
            StatusCode::OK,
            ResponseEnvelope::success(ok_message, serde_json::Value::Null),
        )
    } else {
        let status = StatusCode::SERVICE_UNAVAILABLE;
        (status, ResponseEnvelope::failure(status, failed_message, None))
    };
    HttpResponse::build(status)
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(envelope)
}

/// Readiness probe: 200 once the server accepts traffic, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready(), "ready", "not ready")
}

/// Liveness probe: 503 once the process has been flagged unhealthy.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive"),
        (status = 503, description = "Process should be restarted")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive(), "alive", "unhealthy")
}
