//! Gateway configuration loaded via OrthoConfig.
//!
//! Values come from the environment (prefix `GATEWAY_`), a configuration
//! file, or command-line flags, with defaults suitable for pointing at the
//! public JSONPlaceholder instance.

use std::time::Duration;

use ortho_config::OrthoConfig;
use pagination::{PageLimits, PageLimitsError};
use serde::Deserialize;

const DEFAULT_UPSTREAM_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8080;

/// Configuration values controlling the gateway process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GATEWAY")]
pub struct AppSettings {
    /// Base URL of the upstream directory API.
    pub upstream_base_url: Option<String>,
    /// Upstream request timeout in seconds.
    pub upstream_timeout_seconds: Option<u64>,
    /// Interface the HTTP server binds to.
    pub bind_host: Option<String>,
    /// Port the HTTP server binds to.
    pub bind_port: Option<u16>,
    /// Widen the default log filter to debug level.
    #[ortho_config(default = false)]
    pub debug: bool,
    /// Page size applied when the limit parameter is missing.
    pub default_page_limit: Option<usize>,
    /// Upper bound on the page size.
    pub max_page_limit: Option<usize>,
}

impl AppSettings {
    /// Return the configured upstream base URL, falling back to the public
    /// JSONPlaceholder instance.
    pub fn upstream_base_url(&self) -> &str {
        self.upstream_base_url
            .as_deref()
            .unwrap_or(DEFAULT_UPSTREAM_BASE_URL)
    }

    /// Return the upstream request timeout.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(
            self.upstream_timeout_seconds
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECONDS),
        )
    }

    /// Return the host and port the server should bind to.
    pub fn bind_address(&self) -> (String, u16) {
        (
            self.bind_host
                .clone()
                .unwrap_or_else(|| DEFAULT_BIND_HOST.to_owned()),
            self.bind_port.unwrap_or(DEFAULT_BIND_PORT),
        )
    }

    /// Build the pagination limits from the configured page sizes.
    ///
    /// # Errors
    /// Returns [`PageLimitsError`] when a configured limit is zero or the
    /// default page size exceeds the maximum.
    pub fn page_limits(&self) -> Result<PageLimits, PageLimitsError> {
        PageLimits::new(
            self.default_page_limit.unwrap_or(PageLimits::DEFAULT_LIMIT),
            self.max_page_limit.unwrap_or(PageLimits::DEFAULT_MAX_LIMIT),
        )
    }
}
