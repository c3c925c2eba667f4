//! Health endpoint for orchestration and load balancers.
//!
//! The gateway holds no state and keeps no upstream connection open, so
//! there is nothing to probe: a served response is the health signal, and
//! the endpoint always answers 200.

use actix_web::{HttpResponse, get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status; always `healthy` while the process serves requests.
    #[schema(example = "healthy")]
    pub status: String,
    /// Human-readable status message.
    #[schema(example = "service is running")]
    pub message: String,
}

impl HealthResponse {
    /// The body served while the process is up.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_owned(),
            message: "service is running".to_owned(),
        }
    }
}

/// Health probe. Answers 200 regardless of upstream availability; upstream
/// failures surface per-request through the envelope codes instead.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    operation_id = "health"
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy())
}
