//! Backend entry-point: wires the registration endpoints, health probes, and
//! OpenAPI docs.

use std::env;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::Trace;
use backend::domain::ports::{FixtureUserStore, RecordingCodeDelivery};
use backend::domain::{RegistrationService, VerificationCodeStore};
use backend::inbound::http;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = env::var("REGISTER_BIND").unwrap_or_else(|_| "0.0.0.0:8080".into());

    // One code store for the process lifetime; verification state does not
    // survive a restart and is not shared across instances.
    let codes = Arc::new(VerificationCodeStore::new());
    // Real collaborators plug in here once the store and mail teams land
    // their adapters; until then the fixtures preserve dev behaviour.
    let service = RegistrationService::new(
        Arc::new(FixtureUserStore),
        Arc::new(RecordingCodeDelivery::new()),
        codes,
    );
    let http_state = web::Data::new(HttpState::new(Arc::new(service)));

    let health_state = web::Data::new(HealthState::new());
    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(http_state.clone(), server_health_state.clone())
    })
    .bind(bind_addr)?;

    health_state.mark_ready();
    server.run().await
}

fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    #[cfg_attr(not(debug_assertions), allow(unused_mut))]
    let mut app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .wrap(Trace)
        .configure(http::configure);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}
