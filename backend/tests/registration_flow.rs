//! End-to-end walk through the six registration stages.
//!
//! Builds the HTTP app from the same `configure` wiring the server uses,
//! backed by the fixture user store and the recording delivery channel, and
//! drives a complete registration in order.

use std::sync::Arc;

use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use backend::Trace;
use backend::domain::ports::{FixtureUserStore, RecordingCodeDelivery};
use backend::domain::{EmailAddress, RegistrationService, VerificationCodeStore};
use backend::inbound::http;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;

struct World {
    delivery: Arc<RecordingCodeDelivery>,
    codes: Arc<VerificationCodeStore>,
    state: HttpState,
}

fn world() -> World {
    let delivery = Arc::new(RecordingCodeDelivery::new());
    let codes = Arc::new(VerificationCodeStore::new());
    let service = RegistrationService::new(
        Arc::new(FixtureUserStore),
        Arc::clone(&delivery),
        Arc::clone(&codes),
    );
    World {
        delivery,
        codes,
        state: HttpState::new(Arc::new(service)),
    }
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(HealthState::new()))
        .wrap(Trace)
        .configure(http::configure)
}

async fn post_json(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
    payload: &Value,
) -> (actix_web::http::StatusCode, Value) {
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("json body");
    (status, value)
}

#[actix_web::test]
async fn full_registration_walk() {
    let world = world();
    let app = actix_test::init_service(test_app(world.state.clone())).await;

    // Stage 1: basic info.
    let (status, body) = post_json(
        &app,
        "/api/register/basic",
        &json!({
            "userId": "alice01",
            "userPassword": "abc123",
            "userPasswordCheck": "abc123",
            "userName": "Alice",
            "userEmail": "alice@example.com",
        }),
    )
    .await;
    assert!(status.is_success());
    assert_eq!(body["success"], json!(true));

    // Stage 2: email duplicate check.
    let (status, _) = post_json(
        &app,
        "/api/register/email/check",
        &json!({ "userEmail": "alice@example.com" }),
    )
    .await;
    assert!(status.is_success());

    // Stage 3: code issuance lands on the recording channel.
    let (status, _) = post_json(
        &app,
        "/api/register/email/sendCode",
        &json!({ "userEmail": "alice@example.com" }),
    )
    .await;
    assert!(status.is_success());
    let deliveries = world.delivery.deliveries();
    assert_eq!(deliveries.len(), 1);
    let code = deliveries[0].1.clone();
    let address = EmailAddress::new("alice@example.com").expect("valid email");
    assert_eq!(
        world.codes.peek(&address).map(|stored| stored.as_str().to_owned()),
        Some(code.clone())
    );

    // Stage 4: verification with the delivered code.
    let (status, body) = post_json(
        &app,
        "/api/register/email/verifyCode",
        &json!({ "userEmail": "alice@example.com", "inputEmailAuthCode": code }),
    )
    .await;
    assert!(status.is_success());
    assert_eq!(body["message"], json!("email verification complete"));

    // Stage 5: preferences echo.
    let (status, body) = post_json(
        &app,
        "/api/register/preferences",
        &json!({
            "userPreferredGenre": ["drama"],
            "userOwnedOtt": ["netflix"],
        }),
    )
    .await;
    assert!(status.is_success());
    assert_eq!(body["data"]["preferredGenre"], json!(["drama"]));

    // Stage 6: completion returns the finalized record.
    let (status, body) = post_json(
        &app,
        "/api/register/complete",
        &json!({
            "userId": "alice01",
            "userPassword": "abc123",
            "userName": "Alice",
            "userEmail": "alice@example.com",
            "userPreferredGenre": ["drama"],
            "userOwnedOtt": ["netflix"],
        }),
    )
    .await;
    assert!(status.is_success());
    let data = body.get("data").expect("finalized record");
    assert_eq!(data["userId"], json!("alice01"));
    assert_eq!(data["userEmail"], json!("alice@example.com"));
    assert_eq!(data["preferredGenre"], json!(["drama"]));
    assert_eq!(data["ownedOtt"], json!(["netflix"]));
    assert!(
        data.get("createdAt")
            .and_then(Value::as_str)
            .is_some_and(|timestamp| !timestamp.is_empty())
    );
}

#[actix_web::test]
async fn stages_are_independently_callable() {
    // Completion without any earlier stage still succeeds: sequencing is a
    // client contract, not enforced by the service.
    let world = world();
    let app = actix_test::init_service(test_app(world.state)).await;

    let (status, body) = post_json(
        &app,
        "/api/register/complete",
        &json!({
            "userId": "bob_2024",
            "userPassword": "pw1234",
            "userName": "Bob",
            "userEmail": "bob@example.com",
            "userPreferredGenre": [],
            "userOwnedOtt": [],
        }),
    )
    .await;
    assert!(status.is_success());
    assert_eq!(body["message"], json!("registration complete"));
}

#[actix_web::test]
async fn responses_carry_a_trace_id_header() {
    let world = world();
    let app = actix_test::init_service(test_app(world.state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/register/email/check")
        .set_json(json!({ "userEmail": "alice@example.com" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.headers().contains_key("trace-id"));
}

#[actix_web::test]
async fn health_probes_respond() {
    let world = world();
    let app = actix_test::init_service(test_app(world.state)).await;

    let request = actix_test::TestRequest::get().uri("/health/live").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.status().is_success());
}
