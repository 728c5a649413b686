//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::RegistrationStages;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn RegistrationStages>,
}

impl HttpState {
    /// Construct state over a registration use-case implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{FixtureUserStore, RecordingCodeDelivery};
    /// use backend::domain::{RegistrationService, VerificationCodeStore};
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let service = RegistrationService::new(
    ///     Arc::new(FixtureUserStore),
    ///     Arc::new(RecordingCodeDelivery::new()),
    ///     Arc::new(VerificationCodeStore::new()),
    /// );
    /// let state = HttpState::new(Arc::new(service));
    /// let _registration = state.registration.clone();
    /// ```
    #[must_use]
    pub fn new(registration: Arc<dyn RegistrationStages>) -> Self {
        Self { registration }
    }
}
