//! Registration stage operations.
//!
//! Implements the [`RegistrationStages`] driving port on top of the two
//! driven ports and the injected [`VerificationCodeStore`]. Collaborator
//! failures are wrapped as [`ErrorCode::DependencyFailure`] so callers can
//! distinguish client-caused from infrastructure-caused failure; the three
//! client-facing error kinds are produced here or at the boundary.
//!
//! [`ErrorCode::DependencyFailure`]: crate::domain::ErrorCode::DependencyFailure

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    BasicInfo, BasicInfoRequest, CodeDelivery, CodeDeliveryError, CompletionRequest,
    RegistrationStages, UserStore, UserStoreError,
};
use crate::domain::{
    AccountRecord, EmailAddress, Error, Preferences, VerificationCodeStore,
};

/// Registration service implementing the driving port.
#[derive(Clone)]
pub struct RegistrationService<U, D> {
    users: Arc<U>,
    delivery: Arc<D>,
    codes: Arc<VerificationCodeStore>,
}

impl<U, D> RegistrationService<U, D> {
    /// Create a new service over the given collaborators and code store.
    pub fn new(users: Arc<U>, delivery: Arc<D>, codes: Arc<VerificationCodeStore>) -> Self {
        Self {
            users,
            delivery,
            codes,
        }
    }
}

impl<U, D> RegistrationService<U, D>
where
    U: UserStore,
    D: CodeDelivery,
{
    fn map_user_store_error(error: UserStoreError) -> Error {
        match error {
            UserStoreError::Connection { message } => {
                Error::dependency_failure(format!("user store unreachable: {message}"))
            }
            UserStoreError::Query { message } => {
                Error::dependency_failure(format!("user store query failed: {message}"))
            }
        }
    }

    fn map_delivery_error(error: CodeDeliveryError) -> Error {
        match error {
            CodeDeliveryError::Unavailable { message } => {
                Error::dependency_failure(format!("code delivery unavailable: {message}"))
            }
            CodeDeliveryError::Rejected { message } => {
                Error::dependency_failure(format!("code delivery rejected: {message}"))
            }
        }
    }

    async fn ensure_email_available(&self, email: &EmailAddress) -> Result<(), Error> {
        let taken = self
            .users
            .email_exists(email)
            .await
            .map_err(Self::map_user_store_error)?;
        if taken {
            return Err(
                Error::conflict("email address is already registered").with_details(json!({
                    "field": "userEmail",
                    "code": "duplicate_email",
                })),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl<U, D> RegistrationStages for RegistrationService<U, D>
where
    U: UserStore,
    D: CodeDelivery,
{
    async fn register_basic(&self, request: BasicInfoRequest) -> Result<BasicInfo, Error> {
        if request.password.as_str() != request.password_check {
            return Err(Error::conflict("passwords do not match").with_details(json!({
                "field": "userPasswordCheck",
                "code": "password_mismatch",
            })));
        }

        let taken = self
            .users
            .username_exists(&request.username)
            .await
            .map_err(Self::map_user_store_error)?;
        if taken {
            return Err(
                Error::conflict("user id is already registered").with_details(json!({
                    "field": "userId",
                    "code": "duplicate_user_id",
                })),
            );
        }
        self.ensure_email_available(&request.email).await?;

        Ok(BasicInfo {
            username: request.username,
            display_name: request.display_name,
            email: request.email,
        })
    }

    async fn check_email(&self, email: &EmailAddress) -> Result<(), Error> {
        self.ensure_email_available(email).await
    }

    async fn send_code(&self, email: &EmailAddress) -> Result<(), Error> {
        let code = self.codes.issue(email);
        debug!(email = %email, "verification code issued");
        self.delivery
            .send(email, &code)
            .await
            .map_err(Self::map_delivery_error)
    }

    async fn verify_code(&self, email: &EmailAddress, candidate: &str) -> Result<(), Error> {
        match self.codes.check(email, candidate) {
            Err(not_issued) => Err(Error::not_issued(not_issued.to_string())),
            Ok(false) => Err(Error::conflict("verification code does not match").with_details(
                json!({
                    "field": "inputEmailAuthCode",
                    "code": "code_mismatch",
                }),
            )),
            Ok(true) => Ok(()),
        }
    }

    async fn save_preferences(&self, preferences: Preferences) -> Result<Preferences, Error> {
        // Pure echo: nothing is persisted before completion.
        Ok(preferences)
    }

    async fn complete(&self, request: CompletionRequest) -> Result<AccountRecord, Error> {
        let record = AccountRecord {
            username: request.username,
            password: request.password,
            display_name: request.display_name,
            email: request.email,
            preferred_genres: request.preferences.preferred_genres,
            owned_services: request.preferences.owned_services,
            created_at: Utc::now(),
        };
        self.users
            .create(&record)
            .await
            .map_err(Self::map_user_store_error)?;
        Ok(record)
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
