//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (users, comments,
//!   health)
//! - **Schemas**: Domain type wrappers ([`UserSummarySchema`],
//!   [`CommentSummarySchema`], the envelope shapes) that provide OpenAPI
//!   definitions without coupling domain types to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::schemas::{
    CommentEnvelopeSchema, CommentSummarySchema, PageInfoSchema, PagedUserEnvelopeSchema,
    UserEnvelopeSchema, UserSummarySchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Placeholder gateway API",
        description = "Enveloped JSONPlaceholder user and comment summaries with optional pagination.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::list_users_filtered,
        crate::inbound::http::comments::list_comments,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        UserSummarySchema,
        CommentSummarySchema,
        PageInfoSchema,
        UserEnvelopeSchema,
        CommentEnvelopeSchema,
        PagedUserEnvelopeSchema,
        HealthResponse,
    )),
    tags(
        (name = "users", description = "User summary listings"),
        (name = "comments", description = "Comment summary listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
