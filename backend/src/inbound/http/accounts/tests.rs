//! Tests for the account API handlers.

use super::*;
use crate::domain::ports::{
    AccountServiceError, MockAccountService, MockTokenIssuer, PlaceholderTokenIssuer,
    TokenIssueError, TokenIssuer,
};
use crate::domain::{Account, AccountId, EmailAddress};
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

const ACCOUNT_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn sample_account() -> Account {
    let id = AccountId::from_uuid(Uuid::parse_str(ACCOUNT_ID).expect("fixture uuid"));
    let email = EmailAddress::new("ada@example.com").expect("fixture email");
    Account::new(id, "Ada Lovelace", email, "Analyst")
}

fn valid_registration() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "occupation": "Analyst",
        "password": "difference-engine",
    })
}

async fn call(
    service: MockAccountService,
    tokens: MockTokenIssuer,
    uri: &str,
    body: &str,
) -> (StatusCode, Value) {
    let state = HttpState::new(Arc::new(service), Arc::new(tokens));
    let app = actix_test::init_service(
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(register)
                .service(login)
                .service(check_email_availability),
        ),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload(body.to_owned())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("envelope payload");
    assert_eq!(
        value.get("code").and_then(Value::as_u64),
        Some(u64::from(status.as_u16())),
        "envelope code mirrors HTTP status"
    );
    (status, value)
}

fn placeholder_tokens() -> MockTokenIssuer {
    let mut tokens = MockTokenIssuer::new();
    tokens
        .expect_issue()
        .returning(|account| PlaceholderTokenIssuer.issue(account));
    tokens
}

fn untouched_tokens() -> MockTokenIssuer {
    let mut tokens = MockTokenIssuer::new();
    tokens.expect_issue().times(0);
    tokens
}

#[rstest]
#[actix_web::test]
async fn register_rejects_invalid_fields_without_calling_service() {
    let mut service = MockAccountService::new();
    service.expect_register_account().times(0);

    let body = json!({"name": "", "email": "bad", "occupation": "x", "password": "1"});
    let (status, value) =
        call(service, untouched_tokens(), "/api/v1/users", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["message"], json!("Failed to register account"));
    assert_eq!(value["status"], json!("error"));
    let errors = value["data"]["errors"].as_object().expect("field mapping");
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("password"));
    assert!(!errors.contains_key("occupation"));
}

#[rstest]
#[case("/api/v1/users", "Failed to register account")]
#[case("/api/v1/sessions", "Login Failed!")]
#[case("/api/v1/email_checkers", "Email not found!")]
#[actix_web::test]
async fn malformed_json_is_answered_with_envelope(#[case] uri: &str, #[case] message: &str) {
    let (status, value) =
        call(MockAccountService::new(), untouched_tokens(), uri, "{not json").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["message"], json!(message));
    assert_eq!(
        value["data"],
        json!({"errors": {"body": "request body must be valid JSON"}})
    );
}

#[rstest]
#[actix_web::test]
async fn register_hides_service_error_detail() {
    let mut service = MockAccountService::new();
    service
        .expect_register_account()
        .times(1)
        .return_once(|_| Err(AccountServiceError::email_taken()));

    let (status, value) = call(
        service,
        untouched_tokens(),
        "/api/v1/users",
        &valid_registration().to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        value,
        json!({
            "message": "Failed to register account",
            "code": 400,
            "status": "error",
            "data": null,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn register_maps_token_failure_to_bad_request() {
    let mut service = MockAccountService::new();
    service
        .expect_register_account()
        .return_once(|_| Ok(sample_account()));
    let mut tokens = MockTokenIssuer::new();
    tokens
        .expect_issue()
        .return_once(|_| Err(TokenIssueError::issue("signer offline")));

    let (status, value) =
        call(service, tokens, "/api/v1/users", &valid_registration().to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["data"], Value::Null);
}

#[rstest]
#[case("/api/v1/users", "Failed to register account")]
#[case("/api/v1/sessions", "Login Failed!")]
#[case("/api/v1/email_checkers", "Email not found!")]
#[actix_web::test]
async fn oversized_body_is_answered_with_envelope(#[case] uri: &str, #[case] message: &str) {
    let mut body = valid_registration();
    body["name"] = json!("a".repeat(MAX_BODY_BYTES + 1));

    let (status, value) = call(
        MockAccountService::new(),
        untouched_tokens(),
        uri,
        &body.to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(value["message"], json!(message));
    assert_eq!(value["status"], json!("error"));
    assert_eq!(
        value["data"],
        json!({"errors": {"body": "request body must not exceed 262144 bytes"}})
    );
}

#[rstest]
#[actix_web::test]
async fn register_returns_account_view() {
    let mut service = MockAccountService::new();
    service
        .expect_register_account()
        .withf(|input| {
            input.email().as_str() == "ada@example.com"
                && input.name() == "Ada Lovelace"
                && input.password() == "difference-engine"
        })
        .times(1)
        .return_once(|_| Ok(sample_account()));

    let (status, value) = call(
        service,
        placeholder_tokens(),
        "/api/v1/users",
        &valid_registration().to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value,
        json!({
            "message": "Account has been registered",
            "code": 200,
            "status": "success",
            "data": {
                "id": ACCOUNT_ID,
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "occupation": "Analyst",
                "token": "token",
            },
        })
    );
}

#[rstest]
#[actix_web::test]
async fn login_surfaces_service_error_message() {
    let mut service = MockAccountService::new();
    service
        .expect_authenticate()
        .times(1)
        .return_once(|_| Err(AccountServiceError::wrong_password()));

    let body = json!({"email": "ada@example.com", "password": "nope"});
    let (status, value) =
        call(service, untouched_tokens(), "/api/v1/sessions", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["message"], json!("Login Failed!"));
    assert_eq!(value["status"], json!("error"));
    assert_eq!(value["data"], json!({"errors": "wrong password"}));
}

#[rstest]
#[actix_web::test]
async fn login_maps_token_failure_to_unprocessable() {
    let mut service = MockAccountService::new();
    service
        .expect_authenticate()
        .return_once(|_| Ok(sample_account()));
    let mut tokens = MockTokenIssuer::new();
    tokens
        .expect_issue()
        .times(1)
        .return_once(|_| Err(TokenIssueError::issue("signer offline")));

    let body = json!({"email": "ada@example.com", "password": "difference-engine"});
    let (status, value) = call(service, tokens, "/api/v1/sessions", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["message"], json!("Login Failed!"));
    assert_eq!(
        value["data"],
        json!({"errors": "token issuance failed: signer offline"})
    );
}

#[rstest]
#[actix_web::test]
async fn login_validation_reports_missing_fields() {
    let mut service = MockAccountService::new();
    service.expect_authenticate().times(0);

    let (status, value) = call(service, untouched_tokens(), "/api/v1/sessions", "{}").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        value["data"],
        json!({"errors": {
            "email": "email is required",
            "password": "password is required",
        }})
    );
}

#[rstest]
#[actix_web::test]
async fn login_returns_account_view_with_token() {
    let mut service = MockAccountService::new();
    service
        .expect_authenticate()
        .withf(|input| input.email().as_str() == "ada@example.com")
        .return_once(|_| Ok(sample_account()));

    let body = json!({"email": "Ada@Example.com", "password": "difference-engine"});
    let (status, value) =
        call(service, placeholder_tokens(), "/api/v1/sessions", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["message"], json!("Login Successfully!"));
    assert_eq!(value["data"]["id"], json!(ACCOUNT_ID));
    assert_eq!(value["data"]["token"], json!("token"));
}

#[rstest]
#[case(true, "Email is available")]
#[case(false, "Email has been registered")]
#[actix_web::test]
async fn email_check_reports_availability(#[case] available: bool, #[case] message: &str) {
    let mut service = MockAccountService::new();
    service
        .expect_is_email_available()
        .times(1)
        .return_once(move |_| Ok(available));

    let body = json!({"email": "grace@example.com"});
    let (status, value) = call(
        service,
        untouched_tokens(),
        "/api/v1/email_checkers",
        &body.to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value,
        json!({
            "message": message,
            "code": 200,
            "status": "success",
            "data": {"is_available": available},
        })
    );
}

#[rstest]
#[actix_web::test]
async fn email_check_masks_service_failure() {
    let mut service = MockAccountService::new();
    service
        .expect_is_email_available()
        .return_once(|_| Err(AccountServiceError::storage("connection reset")));

    let body = json!({"email": "grace@example.com"});
    let (status, value) = call(
        service,
        untouched_tokens(),
        "/api/v1/email_checkers",
        &body.to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["message"], json!("Email not found!"));
    assert_eq!(value["data"], json!({"errors": "Server Error"}));
}
