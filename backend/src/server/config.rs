//! HTTP server configuration object and helpers.

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    bind_addr: (String, u16),
}

impl ServerConfig {
    /// Construct a server configuration binding the given host and port.
    #[must_use]
    pub fn new(bind_addr: (String, u16)) -> Self {
        Self { bind_addr }
    }

    /// Return the host and port the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.bind_addr.0.as_str(), self.bind_addr.1)
    }
}
