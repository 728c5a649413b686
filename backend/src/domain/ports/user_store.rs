//! Port abstraction for the external user store.
//!
//! Persistence lives with another team; this workflow only needs duplicate
//! checks and a single create hand-off. Adapters own connection handling and
//! any partial-write recovery.

use async_trait::async_trait;
use tracing::info;

use crate::domain::{AccountRecord, EmailAddress, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
    }
}

/// Driven port for the external user store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether an account with this login identifier already exists.
    async fn username_exists(&self, username: &Username) -> Result<bool, UserStoreError>;

    /// Whether an account with this email address already exists.
    async fn email_exists(&self, email: &EmailAddress) -> Result<bool, UserStoreError>;

    /// Persist the finalized record. Assumed to succeed or fail fatally.
    async fn create(&self, record: &AccountRecord) -> Result<(), UserStoreError>;
}

/// In-memory stand-in used until real persistence is wired.
///
/// Reports no duplicates and logs each create request instead of storing it,
/// preserving the development behaviour the registration flow was built
/// against.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserStore;

#[async_trait]
impl UserStore for FixtureUserStore {
    async fn username_exists(&self, _username: &Username) -> Result<bool, UserStoreError> {
        Ok(false)
    }

    async fn email_exists(&self, _email: &EmailAddress) -> Result<bool, UserStoreError> {
        Ok(false)
    }

    async fn create(&self, record: &AccountRecord) -> Result<(), UserStoreError> {
        info!(username = %record.username, email = %record.email, "create requested on fixture user store");
        Ok(())
    }
}
