//! Driving port for the registration stage operations.
//!
//! Inbound adapters call this port after parsing and syntax-validating their
//! payloads, so every operation receives already well-formed identity types.
//! The stages are independently callable: nothing gates a later stage on an
//! earlier one having succeeded for the same identity. Sequencing is a
//! client contract, not enforced here.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{
    AccountRecord, DisplayName, EmailAddress, Error, Password, Preferences, Username,
};

/// Payload for the basic-info stage.
#[derive(Debug, Clone)]
pub struct BasicInfoRequest {
    pub username: Username,
    pub password: Password,
    /// Raw confirmation input, compared verbatim against the password.
    pub password_check: String,
    pub display_name: DisplayName,
    pub email: EmailAddress,
}

/// Identity echo returned by the basic-info stage. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicInfo {
    #[serde(rename = "userId")]
    pub username: Username,
    #[serde(rename = "userName")]
    pub display_name: DisplayName,
    #[serde(rename = "userEmail")]
    pub email: EmailAddress,
}

/// Payload for the completion stage.
///
/// The client resupplies the full identity here; no partial-registration
/// session state is tracked across stages.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub username: Username,
    pub password: Password,
    pub display_name: DisplayName,
    pub email: EmailAddress,
    pub preferences: Preferences,
}

/// Domain use-case port for the six registration stages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationStages: Send + Sync {
    /// Check password confirmation and duplicates; echo the identity.
    async fn register_basic(&self, request: BasicInfoRequest) -> Result<BasicInfo, Error>;

    /// Pure duplicate query for an email address.
    async fn check_email(&self, email: &EmailAddress) -> Result<(), Error>;

    /// Issue a verification code and hand it to the delivery channel.
    async fn send_code(&self, email: &EmailAddress) -> Result<(), Error>;

    /// Compare a candidate against the issued code for the address.
    async fn verify_code(&self, email: &EmailAddress, candidate: &str) -> Result<(), Error>;

    /// Echo the submitted preference sets.
    async fn save_preferences(&self, preferences: Preferences) -> Result<Preferences, Error>;

    /// Assemble the finalized record, hand it to the user store, return it.
    async fn complete(&self, request: CompletionRequest) -> Result<AccountRecord, Error>;
}
