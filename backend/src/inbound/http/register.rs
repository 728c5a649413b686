//! Registration API handlers.
//!
//! ```text
//! POST /api/register/basic
//! POST /api/register/email/check
//! POST /api/register/email/sendCode
//! POST /api/register/email/verifyCode
//! POST /api/register/preferences
//! POST /api/register/complete
//! ```
//!
//! Each handler parses its stage payload into domain types, calls the
//! registration driving port, and wraps the outcome in the uniform
//! `{success, message, data?}` envelope. Validation failures are rendered
//! before the port is reached.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::ports::{BasicInfoRequest, CompletionRequest};
use crate::domain::{
    DisplayName, EmailAddress, Error, IdentityValidationError, Password, Preferences, Username,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for the basic-info stage.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBasicRequest {
    pub user_id: String,
    pub user_password: String,
    pub user_password_check: String,
    pub user_name: String,
    pub user_email: String,
}

/// Request payload for the email duplicate check.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailCheckRequest {
    pub user_email: String,
}

/// Request payload for code issuance.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendCodeRequest {
    pub user_email: String,
}

/// Request payload for code verification.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeRequest {
    pub user_email: String,
    pub input_email_auth_code: String,
}

/// Request payload for the preference stage.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesRequest {
    pub user_preferred_genre: Vec<String>,
    pub user_owned_ott: Vec<String>,
}

/// Request payload for the completion stage; the client resupplies
/// everything.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRequest {
    pub user_id: String,
    pub user_password: String,
    pub user_name: String,
    pub user_email: String,
    pub user_preferred_genre: Vec<String>,
    pub user_owned_ott: Vec<String>,
}

/// Uniform response envelope shared by every stage.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<Value>,
}

impl RegisterResponse {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

fn identity_error_code(error: &IdentityValidationError) -> &'static str {
    match error {
        IdentityValidationError::UsernameTooShort { .. } => "user_id_too_short",
        IdentityValidationError::UsernameInvalidCharacters => "user_id_invalid_characters",
        IdentityValidationError::PasswordTooShort { .. } => "password_too_short",
        IdentityValidationError::PasswordMissingDigit => "password_missing_digit",
        IdentityValidationError::PasswordMissingLetter => "password_missing_letter",
        IdentityValidationError::InvalidEmail => "invalid_email",
    }
}

fn map_identity_error(field: &'static str, error: IdentityValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "code": identity_error_code(&error),
    }))
}

fn parse_username(raw: String) -> Result<Username, Error> {
    Username::new(raw).map_err(|error| map_identity_error("userId", error))
}

fn parse_password(raw: String) -> Result<Password, Error> {
    Password::new(raw).map_err(|error| map_identity_error("userPassword", error))
}

fn parse_email(raw: String) -> Result<EmailAddress, Error> {
    EmailAddress::new(raw).map_err(|error| map_identity_error("userEmail", error))
}

fn parse_basic(payload: RegisterBasicRequest) -> Result<BasicInfoRequest, Error> {
    Ok(BasicInfoRequest {
        username: parse_username(payload.user_id)?,
        password: parse_password(payload.user_password)?,
        password_check: payload.user_password_check,
        display_name: DisplayName::new(payload.user_name),
        email: parse_email(payload.user_email)?,
    })
}

fn parse_complete(payload: CompleteRequest) -> Result<CompletionRequest, Error> {
    Ok(CompletionRequest {
        username: parse_username(payload.user_id)?,
        password: parse_password(payload.user_password)?,
        display_name: DisplayName::new(payload.user_name),
        email: parse_email(payload.user_email)?,
        preferences: Preferences {
            preferred_genres: payload.user_preferred_genre.into_iter().collect(),
            owned_services: payload.user_owned_ott.into_iter().collect(),
        },
    })
}

fn to_data<T: Serialize>(value: &T) -> Result<Value, Error> {
    serde_json::to_value(value)
        .map_err(|error| Error::internal(format!("failed to serialize response data: {error}")))
}

/// Validate basic info, check duplicates, and echo the identity.
#[utoipa::path(
    post,
    path = "/api/register/basic",
    request_body = RegisterBasicRequest,
    responses(
        (status = 200, description = "Basic information verified", body = RegisterResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Duplicate identifier/email or password mismatch", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["register"],
    operation_id = "registerBasic"
)]
#[post("/basic")]
pub async fn register_basic(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterBasicRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let request = parse_basic(payload.into_inner())?;
    let echo = state.registration.register_basic(request).await?;
    Ok(web::Json(
        RegisterResponse::ok("basic information verified").with_data(to_data(&echo)?),
    ))
}

/// Validate email syntax and report whether the address is free.
#[utoipa::path(
    post,
    path = "/api/register/email/check",
    request_body = EmailCheckRequest,
    responses(
        (status = 200, description = "Email address is available", body = RegisterResponse),
        (status = 400, description = "Malformed email address", body = ErrorSchema),
        (status = 409, description = "Email address already in use", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["register"],
    operation_id = "checkEmail"
)]
#[post("/email/check")]
pub async fn check_email(
    state: web::Data<HttpState>,
    payload: web::Json<EmailCheckRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let email = parse_email(payload.into_inner().user_email)?;
    state.registration.check_email(&email).await?;
    Ok(web::Json(RegisterResponse::ok("email address is available")))
}

/// Issue a verification code and hand it to the delivery channel.
#[utoipa::path(
    post,
    path = "/api/register/email/sendCode",
    request_body = SendCodeRequest,
    responses(
        (status = 200, description = "Verification code sent", body = RegisterResponse),
        (status = 400, description = "Malformed email address", body = ErrorSchema),
        (status = 503, description = "Delivery channel unavailable", body = ErrorSchema)
    ),
    tags = ["register"],
    operation_id = "sendCode"
)]
#[post("/email/sendCode")]
pub async fn send_code(
    state: web::Data<HttpState>,
    payload: web::Json<SendCodeRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let email = parse_email(payload.into_inner().user_email)?;
    state.registration.send_code(&email).await?;
    Ok(web::Json(RegisterResponse::ok("verification code sent")))
}

/// Compare a submitted code against the issued one.
#[utoipa::path(
    post,
    path = "/api/register/email/verifyCode",
    request_body = VerifyCodeRequest,
    responses(
        (status = 200, description = "Email verification complete", body = RegisterResponse),
        (status = 400, description = "Malformed email address", body = ErrorSchema),
        (status = 404, description = "No code issued for this address", body = ErrorSchema),
        (status = 409, description = "Verification code does not match", body = ErrorSchema)
    ),
    tags = ["register"],
    operation_id = "verifyCode"
)]
#[post("/email/verifyCode")]
pub async fn verify_code(
    state: web::Data<HttpState>,
    payload: web::Json<VerifyCodeRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let payload = payload.into_inner();
    let email = parse_email(payload.user_email)?;
    state
        .registration
        .verify_code(&email, &payload.input_email_auth_code)
        .await?;
    Ok(web::Json(RegisterResponse::ok("email verification complete")))
}

/// Echo the submitted preference sets.
#[utoipa::path(
    post,
    path = "/api/register/preferences",
    request_body = PreferencesRequest,
    responses(
        (status = 200, description = "Preferences echoed", body = RegisterResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["register"],
    operation_id = "savePreferences"
)]
#[post("/preferences")]
pub async fn save_preferences(
    state: web::Data<HttpState>,
    payload: web::Json<PreferencesRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let payload = payload.into_inner();
    let preferences = Preferences {
        preferred_genres: payload.user_preferred_genre.into_iter().collect(),
        owned_services: payload.user_owned_ott.into_iter().collect(),
    };
    let echoed = state.registration.save_preferences(preferences).await?;
    Ok(web::Json(
        RegisterResponse::ok("preferred genres and services saved").with_data(to_data(&echoed)?),
    ))
}

/// Assemble the finalized record and hand it to the user store.
#[utoipa::path(
    post,
    path = "/api/register/complete",
    request_body = CompleteRequest,
    responses(
        (status = 200, description = "Registration complete", body = RegisterResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["register"],
    operation_id = "completeRegistration"
)]
#[post("/complete")]
pub async fn complete(
    state: web::Data<HttpState>,
    payload: web::Json<CompleteRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let request = parse_complete(payload.into_inner())?;
    let record = state.registration.complete(request).await?;
    Ok(web::Json(
        RegisterResponse::ok("registration complete").with_data(to_data(&record)?),
    ))
}
