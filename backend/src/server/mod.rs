//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use placeholder_gateway::Trace;
#[cfg(debug_assertions)]
use placeholder_gateway::doc::ApiDoc;
use placeholder_gateway::domain::DirectoryService;
use placeholder_gateway::inbound::http::comments::list_comments;
use placeholder_gateway::inbound::http::health::health;
use placeholder_gateway::inbound::http::state::HttpState;
use placeholder_gateway::inbound::http::users::{list_users, list_users_filtered};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(list_users)
        .service(list_users_filtered)
        .service(list_comments);

    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(health);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server serving the directory endpoints.
///
/// # Parameters
/// - `directory`: the directory service shared by every worker.
/// - `config`: pre-built [`ServerConfig`] with the bind address.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(directory: DirectoryService, config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(directory));
    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(config.bind_addr())?
        .run();

    Ok(server)
}
