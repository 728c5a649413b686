//! Domain primitives, ports, and the registration use-cases.
//!
//! Purpose: keep the registration workflow transport-agnostic. Inbound
//! adapters parse payloads into the strongly typed identities defined here
//! and call the [`ports::RegistrationStages`] driving port; driven ports
//! model the external user store and the code delivery channel.

pub mod account;
pub mod error;
pub mod identity;
pub mod ports;
pub mod registration_service;
pub mod trace_id;
pub mod verification;

pub use self::account::{AccountRecord, Preferences};
pub use self::error::{Error, ErrorCode};
pub use self::identity::{
    DisplayName, EmailAddress, IdentityValidationError, Password, Username,
};
pub use self::registration_service::RegistrationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::verification::{
    CodeMalformed, CodeNotIssued, VerificationCode, VerificationCodeStore,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::conflict("passwords do not match"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
