//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use vouch_backend::Trace;
#[cfg(debug_assertions)]
use vouch_backend::doc::ApiDoc;
use vouch_backend::domain::ports::{LinkOperations, RequestBoard};
use vouch_backend::domain::{LinkService, RequestService};
use vouch_backend::inbound::http::health::{HealthState, live, ready};
use vouch_backend::inbound::http::links::{
    create_link, delete_recommendation, list_recommendations, submit_recommendation, toggle_tried,
};
use vouch_backend::inbound::http::requests::{
    create_request, get_request, list_requests, list_responses, submit_response,
};
use vouch_backend::inbound::http::state::HttpState;
use vouch_backend::outbound::memory::{InMemoryLinkRepository, InMemoryRequestRepository};
use vouch_backend::outbound::persistence::{DieselLinkRepository, DieselRequestRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the HTTP handler state from the configured storage backend.
///
/// Uses Diesel-backed repositories when a pool is configured, in-memory
/// stores otherwise.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let links: Arc<dyn LinkOperations> = Arc::new(LinkService::new(Arc::new(
                DieselLinkRepository::new(pool.clone()),
            )));
            let requests: Arc<dyn RequestBoard> = Arc::new(RequestService::new(Arc::new(
                DieselRequestRepository::new(pool.clone()),
            )));
            HttpState::new(links, requests)
        }
        None => {
            info!("no database configured, serving from in-memory stores");
            let links: Arc<dyn LinkOperations> =
                Arc::new(LinkService::new(Arc::new(InMemoryLinkRepository::new())));
            let requests: Arc<dyn RequestBoard> = Arc::new(RequestService::new(Arc::new(
                InMemoryRequestRepository::new(),
            )));
            HttpState::new(links, requests)
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
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
        .service(create_link)
        .service(submit_recommendation)
        .service(list_recommendations)
        .service(toggle_tried)
        .service(delete_recommendation)
        .service(create_request)
        .service(list_requests)
        .service(get_request)
        .service(submit_response)
        .service(list_responses);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
