//! User summary projection served to clients.

use serde::{Deserialize, Serialize};

use crate::domain::ports::UserRecord;

/// Narrowed user shape: exactly the four fields consumers need.
///
/// Produced from [`UserRecord`] by dropping the nested address, contact, and
/// company details. Serialises with exactly the keys `id`, `name`,
/// `username`, and `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSummary {
    /// Upstream user identifier.
    pub id: u64,
    /// Full display name.
    pub name: String,
    /// Upstream login handle.
    pub username: String,
    /// Contact email address.
    pub email: String,
}

impl From<UserRecord> for UserSummary {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            username: record.username,
            email: record.email,
        }
    }
}
