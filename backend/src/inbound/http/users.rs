//! Users API handlers.
//!
//! ```text
//! GET /api/v1/users
//! GET /api/v1/users/filtered?skip=1&limit=1
//! ```

use actix_web::{get, web};
use serde::Deserialize;

use crate::domain::{Envelope, PagedEnvelope, UserSummary};
use crate::inbound::http::schemas::{PagedUserEnvelopeSchema, UserEnvelopeSchema};
use crate::inbound::http::state::HttpState;

/// Query parameters for the filtered users endpoint.
///
/// Both parameters are optional; out-of-range values are clamped by the
/// service, non-numeric values are rejected with 400 before the handler
/// runs.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Records to skip from the start of the collection.
    pub skip: Option<i64>,
    /// Maximum records to return.
    pub limit: Option<i64>,
}

/// List every user as a summary record.
///
/// The HTTP status mirrors the envelope code: 404 when the upstream holds no
/// users, 500 when the fetch failed.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = UserEnvelopeSchema),
        (status = 404, description = "Upstream returned no users", body = UserEnvelopeSchema),
        (status = 500, description = "Upstream fetch failed", body = UserEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> Envelope<UserSummary> {
    state.directory.list_users().await
}

/// List one page of user summaries.
#[utoipa::path(
    get,
    path = "/api/v1/users/filtered",
    params(
        ("skip" = Option<i64>, Query, description = "Records to skip; negative values clamp to 0"),
        ("limit" = Option<i64>, Query, description = "Page size; clamped to [1, max], default 10")
    ),
    responses(
        (status = 200, description = "One page of users", body = PagedUserEnvelopeSchema),
        (status = 400, description = "Non-numeric skip or limit"),
        (status = 404, description = "Upstream returned no users", body = PagedUserEnvelopeSchema),
        (status = 500, description = "Upstream fetch failed", body = PagedUserEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "listUsersFiltered"
)]
#[get("/users/filtered")]
pub async fn list_users_filtered(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> PagedEnvelope<UserSummary> {
    let PageQuery { skip, limit } = query.into_inner();
    state
        .directory
        .list_users_page(skip.unwrap_or(0), limit)
        .await
}
