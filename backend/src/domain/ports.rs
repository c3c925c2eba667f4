//! Driven port for fetching directory records from the upstream API.
//!
//! The domain owns the record shapes and the error contract so the service
//! layer stays adapter-agnostic. Records mirror the upstream JSON documents;
//! only the summary projections in [`crate::domain::user`] and
//! [`crate::domain::comment`] are served to clients.

use async_trait::async_trait;
use thiserror::Error;

/// One user document as returned by the upstream API.
///
/// The four leading fields are required; the nested address, contact, and
/// company details are tolerated as absent and dropped during narrowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Upstream user identifier.
    pub id: u64,
    /// Full display name.
    pub name: String,
    /// Upstream login handle.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Postal address, when the upstream document carries one.
    pub address: Option<Address>,
    /// Phone number, when present.
    pub phone: Option<String>,
    /// Website, when present.
    pub website: Option<String>,
    /// Employer details, when present.
    pub company: Option<Company>,
}

/// Postal address nested inside a [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Street line.
    pub street: String,
    /// Suite or unit line.
    pub suite: String,
    /// City name.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
    /// Coordinates, when present.
    pub geo: Option<Geo>,
}

/// Coordinates nested inside an [`Address`]; the upstream serialises both
/// axes as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geo {
    /// Latitude as serialised upstream.
    pub lat: String,
    /// Longitude as serialised upstream.
    pub lng: String,
}

/// Employer details nested inside a [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Company slogan.
    pub catch_phrase: String,
    /// Line of business.
    pub bs: String,
}

/// One comment document as returned by the upstream API. All fields are
/// required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
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

/// Errors surfaced while fetching from the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectorySourceError {
    /// Network transport failed before receiving a response.
    #[error("upstream transport failed: {message}")]
    Transport { message: String },
    /// Request or upstream gateway exceeded the timeout.
    #[error("upstream timeout: {message}")]
    Timeout { message: String },
    /// Upstream answered with a non-success status.
    #[error("upstream returned status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },
    /// Upstream response body could not be decoded.
    #[error("upstream response decode failed: {message}")]
    Decode { message: String },
}

impl DirectorySourceError {
    /// Helper for transport-level failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for timeouts, client-side or upstream-reported.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Helper for non-success upstream statuses.
    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            message: message.into(),
        }
    }

    /// Helper for decode failures.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for fetching user and comment collections from the upstream API.
///
/// A failed fetch is an explicit error, distinct from an empty collection;
/// the service maps the former to the 500 envelope and the latter to 404.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch every user document.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use placeholder_gateway::domain::ports::{DirectorySource, FixtureDirectorySource};
    ///
    /// let source = FixtureDirectorySource;
    /// let users = source.fetch_users().await?;
    /// assert!(users.is_empty());
    /// # Ok::<(), placeholder_gateway::domain::ports::DirectorySourceError>(())
    /// ```
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, DirectorySourceError>;

    /// Fetch every comment document.
    async fn fetch_comments(&self) -> Result<Vec<CommentRecord>, DirectorySourceError>;
}

/// Fixture implementation returning empty collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureDirectorySource;

#[async_trait]
impl DirectorySource for FixtureDirectorySource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, DirectorySourceError> {
        Ok(Vec::new())
    }

    async fn fetch_comments(&self) -> Result<Vec<CommentRecord>, DirectorySourceError> {
        Ok(Vec::new())
    }
}
