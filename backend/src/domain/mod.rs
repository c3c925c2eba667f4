//! Domain types and the directory service.
//!
//! Purpose: own the record shapes, the narrowing projections, and the
//! envelope rules independently of any framework. Serialisation contracts
//! (serde) are documented on each type; OpenAPI schemas live in the inbound
//! adapter.
//!
//! Public surface:
//! - UserSummary / CommentSummary — narrowed records served to clients.
//! - Envelope / PagedEnvelope — uniform response wrappers.
//! - DirectoryService — fetch → narrow → wrap → slice pipeline.
//! - ports — the driven `DirectorySource` port and its record types.

pub mod comment;
pub mod directory;
pub mod envelope;
pub mod ports;
pub mod user;

pub use self::comment::CommentSummary;
pub use self::directory::DirectoryService;
pub use self::envelope::{Envelope, PagedEnvelope};
pub use self::user::UserSummary;
