//! Gateway entry-point: wires settings, the upstream source, and the HTTP
//! server.

mod server;

use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use placeholder_gateway::domain::DirectoryService;
use placeholder_gateway::outbound::jsonplaceholder::JsonPlaceholderHttpSource;
use placeholder_gateway::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    init_tracing(settings.debug);

    let base_url = Url::parse(settings.upstream_base_url())
        .map_err(|e| std::io::Error::other(format!("invalid upstream base URL: {e}")))?;
    let source = JsonPlaceholderHttpSource::new(&base_url, settings.upstream_timeout())
        .map_err(|e| std::io::Error::other(format!("failed to build upstream client: {e}")))?;
    let limits = settings
        .page_limits()
        .map_err(|e| std::io::Error::other(format!("invalid page limits: {e}")))?;

    let directory = DirectoryService::new(Arc::new(source), limits);
    create_server(directory, ServerConfig::new(settings.bind_address()))?.await
}

/// Initialise JSON log output, honouring `RUST_LOG` when set.
fn init_tracing(debug: bool) {
    let default_directive = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}
