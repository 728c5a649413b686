//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod register;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

use actix_web::web;

/// Register the API routes on a service config.
///
/// Callers provide `web::Data<HttpState>` and `web::Data<HealthState>` as
/// app data; both the server and integration tests wire apps through this
/// function so the route table cannot drift between them.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/register")
            .service(register::register_basic)
            .service(register::check_email)
            .service(register::send_code)
            .service(register::verify_code)
            .service(register::save_preferences)
            .service(register::complete),
    )
    .service(health::ready)
    .service(health::live);
}
