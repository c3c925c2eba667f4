//! Comment summary projection served to clients.

use serde::{Deserialize, Serialize};

use crate::domain::ports::CommentRecord;

/// Narrowed comment shape; `post_id` serialises as `postId` to match the
/// upstream casing clients already know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommentSummary {
    /// Post the comment belongs to.
    pub post_id: u64,
    /// Upstream comment identifier.
    pub id: u64,
    /// Comment title.
    pub name: String,
    /// Author email address.
    pub email: String,
    /// Comment text.
    pub body: String,
}

impl From<CommentRecord> for CommentSummary {
    fn from(record: CommentRecord) -> Self {
        Self {
            post_id: record.post_id,
            id: record.id,
            name: record.name,
            email: record.email,
            body: record.body,
        }
    }
}
