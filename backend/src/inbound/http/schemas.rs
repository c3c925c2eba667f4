//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their corresponding
//! domain types but live in the inbound adapter layer where framework
//! concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::UserSummary`].
///
/// Narrowed user record served by the users endpoints.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserSummary)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSummarySchema {
    /// Upstream user identifier.
    #[schema(example = 1)]
    id: u64,
    /// Full display name.
    #[schema(example = "Leanne Graham")]
    name: String,
    /// Upstream login handle.
    #[schema(example = "Bret")]
    username: String,
    /// Contact email address.
    #[schema(example = "Sincere@april.biz")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::CommentSummary`].
///
/// Narrowed comment record served by the comments endpoint.
#[derive(ToSchema)]
#[schema(as = crate::domain::CommentSummary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CommentSummarySchema {
    /// Post the comment belongs to.
    #[schema(example = 1)]
    post_id: u64,
    /// Upstream comment identifier.
    #[schema(example = 1)]
    id: u64,
    /// Comment title.
    #[schema(example = "id labore ex et quam laborum")]
    name: String,
    /// Comment author email.
    #[schema(example = "Eliseo@gardner.biz")]
    email: String,
    /// Comment text content.
    body: String,
}

/// OpenAPI schema for [`pagination::PageInfo`].
#[derive(ToSchema)]
#[schema(as = pagination::PageInfo)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PageInfoSchema {
    /// Number of items skipped.
    #[schema(example = 0)]
    skip: usize,
    /// Requested page size after clamping.
    #[schema(example = 10)]
    limit: usize,
    /// Total number of items before slicing.
    #[schema(example = 100)]
    total: usize,
    /// Number of items returned in this response.
    #[schema(example = 10)]
    returned: usize,
}

/// OpenAPI schema for the users envelope,
/// [`crate::domain::Envelope`]`<UserSummary>`.
#[derive(ToSchema)]
#[schema(as = UserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelopeSchema {
    /// Whether the request produced data.
    #[schema(example = true)]
    success: bool,
    /// HTTP-style status code: 200, 404, or 500.
    #[schema(example = 200)]
    code: u16,
    /// Human-readable outcome message.
    #[schema(example = "ok")]
    message: String,
    /// User summaries; empty unless `success`.
    data: Vec<UserSummarySchema>,
}

/// OpenAPI schema for the comments envelope,
/// [`crate::domain::Envelope`]`<CommentSummary>`.
#[derive(ToSchema)]
#[schema(as = CommentEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CommentEnvelopeSchema {
    /// Whether the request produced data.
    #[schema(example = true)]
    success: bool,
    /// HTTP-style status code: 200, 404, or 500.
    #[schema(example = 200)]
    code: u16,
    /// Human-readable outcome message.
    #[schema(example = "ok")]
    message: String,
    /// Comment summaries; empty unless `success`.
    data: Vec<CommentSummarySchema>,
}

/// OpenAPI schema for the paged users envelope,
/// [`crate::domain::PagedEnvelope`]`<UserSummary>`.
#[derive(ToSchema)]
#[schema(as = PagedUserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PagedUserEnvelopeSchema {
    /// Whether the request produced data.
    #[schema(example = true)]
    success: bool,
    /// HTTP-style status code: 200, 404, or 500.
    #[schema(example = 200)]
    code: u16,
    /// Human-readable outcome message.
    #[schema(example = "ok")]
    message: String,
    /// The requested page of user summaries.
    data: Vec<UserSummarySchema>,
    /// Counts describing the page.
    pagination: PageInfoSchema,
}
