//! Live-server harness shared by the endpoint behaviour tests.
//!
//! Requests exercise the real Actix stack, including routing, extractors and
//! the trace middleware, against a recording directory source. The server
//! binds an ephemeral port so tests can run in parallel.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use pagination::PageLimits;
use placeholder_gateway::Trace;
use placeholder_gateway::domain::DirectoryService;
use placeholder_gateway::inbound::http::comments::list_comments;
use placeholder_gateway::inbound::http::health::health;
use placeholder_gateway::inbound::http::state::HttpState;
use placeholder_gateway::inbound::http::users::{list_users, list_users_filtered};
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use crate::doubles::RecordingDirectorySource;

/// Mutable state threaded through the behaviour steps.
pub(crate) struct GatewayWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) source: RecordingDirectorySource,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<GatewayWorld>>;

/// Owns the world and stops the server when the test finishes.
pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        Rc::clone(&self.world)
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        let server = ctx.server.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            server.stop(true).await;
        });
    }
}

/// Run `operation` against the world's server on its single-threaded runtime.
pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

/// Start the gateway on an ephemeral port and hand back its base URL.
async fn spawn_gateway_server(
    source: RecordingDirectorySource,
) -> std::io::Result<(String, ServerHandle)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    let directory = DirectoryService::new(Arc::new(source), PageLimits::default());
    let data = web::Data::new(HttpState::new(directory));

    let server = HttpServer::new(move || {
        let api = web::scope("/api/v1")
            .service(list_users)
            .service(list_users_filtered)
            .service(list_comments);

        App::new()
            .app_data(data.clone())
            .wrap(Trace)
            .service(api)
            .service(health)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("current-thread runtime");
    let local = LocalSet::new();
    let source = RecordingDirectorySource::new();

    let (base_url, server) = local
        .block_on(&runtime, spawn_gateway_server(source.clone()))
        .expect("gateway server should start");

    WorldFixture {
        world: Rc::new(RefCell::new(GatewayWorld {
            runtime,
            local,
            base_url,
            server,
            source,
            last_status: None,
            last_body: None,
            last_trace_id: None,
        })),
    }
}
