//! Port abstraction for the verification code delivery channel.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::info;

use crate::domain::{EmailAddress, VerificationCode};

use super::define_port_error;

define_port_error! {
    /// Errors raised by code delivery adapters.
    pub enum CodeDeliveryError {
        /// The delivery channel could not be reached.
        Unavailable { message: String } => "code delivery channel unavailable: {message}",
        /// The channel refused the message.
        Rejected { message: String } => "code delivery rejected: {message}",
    }
}

/// Driven port for handing a code to the delivery channel.
///
/// Implementations guarantee eventual delivery; in dev and test mode they
/// simply record the attempt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeDelivery: Send + Sync {
    /// Hand `(email, code)` to the channel.
    async fn send(
        &self,
        email: &EmailAddress,
        code: &VerificationCode,
    ) -> Result<(), CodeDeliveryError>;
}

/// Dev/test delivery channel that records each attempt instead of sending.
///
/// Replaces the real channel during development; tests use
/// [`RecordingCodeDelivery::deliveries`] to observe what would have been
/// sent.
#[derive(Debug, Default)]
pub struct RecordingCodeDelivery {
    deliveries: Mutex<Vec<(String, String)>>,
}

impl RecordingCodeDelivery {
    /// Create a channel with no recorded attempts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(email, code)` pairs handed to the channel so far.
    pub fn deliveries(&self) -> Vec<(String, String)> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl CodeDelivery for RecordingCodeDelivery {
    async fn send(
        &self,
        email: &EmailAddress,
        code: &VerificationCode,
    ) -> Result<(), CodeDeliveryError> {
        info!(email = %email, "recording verification code delivery");
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((email.as_str().to_owned(), code.as_str().to_owned()));
        Ok(())
    }
}
