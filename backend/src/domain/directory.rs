//! Directory service: fetch upstream records, narrow them, wrap them.
//!
//! The service is the only caller of the [`DirectorySource`] port. It never
//! returns an error; source failures are logged and collapsed into the 500
//! envelope, empty collections into 404.

use std::sync::Arc;

use pagination::{PageLimits, PageRequest};
use tracing::warn;

use crate::domain::comment::CommentSummary;
use crate::domain::envelope::{Envelope, PagedEnvelope};
use crate::domain::ports::{DirectorySource, DirectorySourceError};
use crate::domain::user::UserSummary;

/// Application service producing enveloped summary collections.
#[derive(Clone)]
pub struct DirectoryService {
    source: Arc<dyn DirectorySource>,
    limits: PageLimits,
}

impl DirectoryService {
    /// Build a service over one source with the configured page limits.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use pagination::PageLimits;
    /// use placeholder_gateway::domain::DirectoryService;
    /// use placeholder_gateway::domain::ports::FixtureDirectorySource;
    ///
    /// let service =
    ///     DirectoryService::new(Arc::new(FixtureDirectorySource), PageLimits::default());
    /// let _ = service;
    /// ```
    pub fn new(source: Arc<dyn DirectorySource>, limits: PageLimits) -> Self {
        Self { source, limits }
    }

    /// Fetch, narrow, and wrap the full user collection.
    pub async fn list_users(&self) -> Envelope<UserSummary> {
        match self.source.fetch_users().await {
            Ok(records) => {
                Envelope::wrap(records.into_iter().map(UserSummary::from).collect(), false)
            }
            Err(error) => {
                warn_fetch_failed("users", &error);
                Envelope::internal_error()
            }
        }
    }

    /// Fetch the user collection and slice one page out of it.
    ///
    /// Raw query values are clamped here so handlers stay a pass-through;
    /// the envelope code reflects the full collection, not the slice.
    pub async fn list_users_page(
        &self,
        skip: i64,
        limit: Option<i64>,
    ) -> PagedEnvelope<UserSummary> {
        let request = PageRequest::clamped(skip, limit, &self.limits);
        self.list_users().await.paged(&request)
    }

    /// Fetch, narrow, and wrap the full comment collection.
    pub async fn list_comments(&self) -> Envelope<CommentSummary> {
        match self.source.fetch_comments().await {
            Ok(records) => Envelope::wrap(
                records.into_iter().map(CommentSummary::from).collect(),
                false,
            ),
            Err(error) => {
                warn_fetch_failed("comments", &error);
                Envelope::internal_error()
            }
        }
    }
}

fn warn_fetch_failed(resource: &str, error: &DirectorySourceError) {
    warn!(resource, error = %error, "upstream fetch failed");
}
