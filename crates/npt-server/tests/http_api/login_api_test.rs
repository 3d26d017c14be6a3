//! Login API integration tests
//!
//! Tests for POST /login in both proxy modes against a mock HRIS

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use npt_auth::LoginMode;
use npt_persistence::MemoryStorage;

use crate::common::{
    LOGIN_PATH, TEST_API_KEY, TEST_AUTHORIZATION, app_state_with, hris_config, init_app,
};

fn login_request(body: Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/login")
        .set_json(body)
        .to_request()
}

// ==================== Pass-through ====================

#[actix_web::test]
async fn test_pass_through_relays_upstream_reply() {
    let hris = MockServer::start().await;
    let payload = json!({"userId": "emp001", "password": "secret", "device": "web"});
    let upstream_reply = json!({"Success": "Welcome", "Data": {"EmployeeName": "A. Rahman"}});

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(header("S_KEYL", TEST_API_KEY))
        .and(header("Authorization", TEST_AUTHORIZATION))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(&upstream_reply))
        .expect(1)
        .mount(&hris)
        .await;

    let state = app_state_with(
        Arc::new(MemoryStorage::new()),
        hris_config(&hris, LoginMode::PassThrough),
    );
    let app = init_app(state).await;

    let resp = test::call_service(&app, login_request(payload)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, upstream_reply);
}

#[actix_web::test]
async fn test_pass_through_upstream_failure() {
    let hris = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&hris)
        .await;

    let state = app_state_with(
        Arc::new(MemoryStorage::new()),
        hris_config(&hris, LoginMode::PassThrough),
    );
    let app = init_app(state).await;

    let resp = test::call_service(&app, login_request(json!({"userId": "x"}))).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "HRIS API failed"}));
}

#[actix_web::test]
async fn test_pass_through_empty_body_forwards_empty_object() {
    let hris = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "no user"})))
        .expect(1)
        .mount(&hris)
        .await;

    let state = app_state_with(
        Arc::new(MemoryStorage::new()),
        hris_config(&hris, LoginMode::PassThrough),
    );
    let app = init_app(state).await;

    let req = test::TestRequest::post().uri("/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "no user"}));
}

#[actix_web::test]
async fn test_malformed_login_body_never_reaches_upstream() {
    let hris = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&hris)
        .await;

    let state = app_state_with(
        Arc::new(MemoryStorage::new()),
        hris_config(&hris, LoginMode::PassThrough),
    );
    let app = init_app(state).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_payload("username=a&password=b")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"success": false, "message": "Invalid JSON body"})
    );
}

// ==================== Form ====================

#[actix_web::test]
async fn test_form_missing_password() {
    let hris = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Success": "ok"})))
        .expect(0)
        .mount(&hris)
        .await;

    let state = app_state_with(
        Arc::new(MemoryStorage::new()),
        hris_config(&hris, LoginMode::Form),
    );
    let app = init_app(state).await;

    let resp = test::call_service(&app, login_request(json!({"username": "a"}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"success": false, "message": "Username and password are required"})
    );
}

#[actix_web::test]
async fn test_form_success() {
    let hris = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(body_string_contains("username=a"))
        .and(body_string_contains("password=b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Success": "ok"})))
        .expect(1)
        .mount(&hris)
        .await;

    let state = app_state_with(
        Arc::new(MemoryStorage::new()),
        hris_config(&hris, LoginMode::Form),
    );
    let app = init_app(state).await;

    let resp = test::call_service(
        &app,
        login_request(json!({"username": "a", "password": "b"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": true, "message": "ok"}));
}

#[actix_web::test]
async fn test_form_rejected_credentials() {
    let hris = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "bad creds"})))
        .expect(1)
        .mount(&hris)
        .await;

    let state = app_state_with(
        Arc::new(MemoryStorage::new()),
        hris_config(&hris, LoginMode::Form),
    );
    let app = init_app(state).await;

    let resp = test::call_service(
        &app,
        login_request(json!({"username": "a", "password": "wrong"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": false, "message": "bad creds"}));
}

#[actix_web::test]
async fn test_form_upstream_gateway_error() {
    let hris = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&hris)
        .await;

    let state = app_state_with(
        Arc::new(MemoryStorage::new()),
        hris_config(&hris, LoginMode::Form),
    );
    let app = init_app(state).await;

    let resp = test::call_service(
        &app,
        login_request(json!({"username": "a", "password": "b"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"success": false, "message": "Login service unavailable"})
    );
}
