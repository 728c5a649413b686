//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the six registration endpoints and the health probes
//! - **Schemas**: stage request/response DTOs plus domain type wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::register::{
    CompleteRequest, EmailCheckRequest, PreferencesRequest, RegisterBasicRequest,
    RegisterResponse, SendCodeRequest, VerifyCodeRequest,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reelbase registration API",
        description = "Multi-step user registration: identity validation, email \
                       verification via one-time codes, preference capture, and \
                       account creation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::register::register_basic,
        crate::inbound::http::register::check_email,
        crate::inbound::http::register::send_code,
        crate::inbound::http::register::verify_code,
        crate::inbound::http::register::save_preferences,
        crate::inbound::http::register::complete,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterBasicRequest,
        EmailCheckRequest,
        SendCodeRequest,
        VerifyCodeRequest,
        PreferencesRequest,
        CompleteRequest,
        RegisterResponse,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "register", description = "Registration workflow stages"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
