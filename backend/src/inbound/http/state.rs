//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain service and remain testable without I/O.

use crate::domain::DirectoryService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Service producing enveloped summary collections.
    pub directory: DirectoryService,
}

impl HttpState {
    /// Construct state around one directory service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use pagination::PageLimits;
    /// use placeholder_gateway::domain::DirectoryService;
    /// use placeholder_gateway::domain::ports::FixtureDirectorySource;
    /// use placeholder_gateway::inbound::http::state::HttpState;
    ///
    /// let service =
    ///     DirectoryService::new(Arc::new(FixtureDirectorySource), PageLimits::default());
    /// let state = HttpState::new(service);
    /// let _directory = state.directory.clone();
    /// ```
    pub fn new(directory: DirectoryService) -> Self {
        Self { directory }
    }
}
