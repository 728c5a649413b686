//! Backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request trace middleware and the domain trace identifier.
pub use domain::TraceId;
pub use middleware::Trace;
