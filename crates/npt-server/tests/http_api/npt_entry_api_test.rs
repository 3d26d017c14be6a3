//! NPT entry API integration tests
//!
//! Tests for /npt-entry endpoints, /health and CORS

use std::sync::Arc;

use actix_web::{
    http::{Method, StatusCode, header},
    test,
};
use serde_json::{Value, json};
use tempfile::TempDir;

use npt_auth::HrisConfig;
use npt_persistence::{JsonFileStorage, NptEntry};

use crate::common::{BrokenStorage, app_state_in_memory, app_state_with, init_app};

fn create_request(body: Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/npt-entry")
        .set_json(body)
        .to_request()
}

// ==================== Create / List ====================

#[actix_web::test]
async fn test_create_then_list() {
    let (state, _storage) = app_state_in_memory();
    let app = init_app(state).await;

    let resp = test::call_service(
        &app,
        create_request(json!({"lineNo": "L-01", "downtimeCause": "Power cut"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["success"], json!(true));
    assert_eq!(created["message"], json!("NPT entry saved successfully"));
    assert_eq!(created["data"]["lineNo"], json!("L-01"));
    assert_eq!(created["data"]["remarks"], json!(""));
    assert_eq!(created["data"]["date"].as_str().unwrap().len(), 10);
    assert!(created["data"]["id"].as_i64().unwrap() > 0);

    let resp = test::call_service(
        &app,
        create_request(json!({"lineNo": "L-02"})),
    )
    .await;
    let second: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::get().uri("/npt-entry").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(resp).await;

    assert_eq!(listed["success"], json!(true));
    assert!(listed.get("message").is_none());
    assert_eq!(listed["data"], json!([second["data"], created["data"]]));
}

#[actix_web::test]
async fn test_create_is_lenient_about_input() {
    let (state, _storage) = app_state_in_memory();
    let app = init_app(state).await;

    // No content type, numeric values, an unknown key, a null and a client id
    let req = test::TestRequest::post()
        .uri("/npt-entry")
        .set_payload(
            r#"{"id": 1, "totalMinutes": 30, "smv": 0.5, "remarks": null, "shift": "B"}"#,
        )
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["totalMinutes"], json!("30"));
    assert_eq!(body["data"]["smv"], json!("0.5"));
    assert_eq!(body["data"]["remarks"], json!(""));
    assert_ne!(body["data"]["id"], json!(1));
    assert!(body["data"].get("shift").is_none());
}

#[actix_web::test]
async fn test_round_trip_every_field() {
    let (state, _storage) = app_state_in_memory();
    let app = init_app(state).await;

    let fields = json!({
        "buildingSection": "Building 2 / Sewing",
        "operationCategory": "Assembly",
        "operation": "Side seam",
        "lineNo": "L-07",
        "machineNo": "M-113",
        "smv": "0.85",
        "downtimeCause": "Needle break",
        "startTime": "09:15",
        "endTime": "09:45",
        "totalMinutes": "30",
        "numOperators": "3",
        "responsibleDept": "Maintenance",
        "responsibleUser": "r.karim",
        "remarks": "Replaced needle, \"quoted\" text",
        "date": "2024-05-02"
    });

    let resp = test::call_service(&app, create_request(fields.clone())).await;
    let created: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::get().uri("/npt-entry").to_request();
    let listed: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let entry = &listed["data"][0];

    assert_eq!(entry, &created["data"]);
    for (key, value) in fields.as_object().unwrap() {
        assert_eq!(&entry[key], value, "field {} changed", key);
    }
}

// ==================== Get / Update ====================

#[actix_web::test]
async fn test_get_by_id() {
    let (state, _storage) = app_state_in_memory();
    let app = init_app(state).await;

    let created: Value = test::read_body_json(
        test::call_service(&app, create_request(json!({"machineNo": "M-1"}))).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/npt-entry/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"], created["data"]);

    let req = test::TestRequest::get()
        .uri(&format!("/npt-entry/{}", id + 1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_merges_partial_fields() {
    let (state, _storage) = app_state_in_memory();
    let app = init_app(state).await;

    let created: Value = test::read_body_json(
        test::call_service(
            &app,
            create_request(json!({"lineNo": "L-01", "remarks": "before", "endTime": "10:00"})),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/npt-entry/{}", id))
        .set_json(json!({"remarks": "after", "endTime": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Entry updated successfully"));
    assert_eq!(body["data"]["id"], json!(id));
    assert_eq!(body["data"]["lineNo"], json!("L-01"));
    assert_eq!(body["data"]["remarks"], json!("after"));
    assert_eq!(body["data"]["endTime"], json!(""));
    assert_eq!(body["data"]["date"], created["data"]["date"]);
}

#[actix_web::test]
async fn test_update_missing_id() {
    let (state, storage) = app_state_in_memory();
    let app = init_app(state).await;
    test::call_service(&app, create_request(json!({"lineNo": "L-01"}))).await;
    let before = storage.snapshot();

    let req = test::TestRequest::put()
        .uri("/npt-entry/42")
        .set_json(json!({"remarks": "x"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": false, "message": "Entry not found"}));
    assert_eq!(storage.snapshot(), before);
}

// ==================== Delete ====================

#[actix_web::test]
async fn test_delete_twice() {
    let (state, storage) = app_state_in_memory();
    let app = init_app(state).await;

    let created: Value = test::read_body_json(
        test::call_service(&app, create_request(json!({"lineNo": "L-01"}))).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/npt-entry/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"success": true, "message": "Entry deleted successfully"})
    );
    assert!(storage.snapshot().is_empty());

    let req = test::TestRequest::delete()
        .uri(&format!("/npt-entry/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ==================== Request validation ====================

#[actix_web::test]
async fn test_non_integer_id_is_bad_request() {
    let (state, _storage) = app_state_in_memory();
    let app = init_app(state).await;

    let req = test::TestRequest::delete()
        .uri("/npt-entry/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": false, "message": "Invalid entry id"}));
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let (state, storage) = app_state_in_memory();
    let app = init_app(state).await;

    let req = test::TestRequest::post()
        .uri("/npt-entry")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"lineNo\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON body")
    );
    assert!(storage.snapshot().is_empty());
}

// ==================== Storage failures ====================

#[actix_web::test]
async fn test_list_degrades_when_store_unreadable() {
    let state = app_state_with(
        Arc::new(BrokenStorage { fail_load: true }),
        HrisConfig::default(),
    );
    let app = init_app(state).await;

    let req = test::TestRequest::get().uri("/npt-entry").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": false, "data": []}));
}

#[actix_web::test]
async fn test_create_fails_when_store_unwritable() {
    let state = app_state_with(
        Arc::new(BrokenStorage { fail_load: false }),
        HrisConfig::default(),
    );
    let app = init_app(state).await;

    let resp = test::call_service(&app, create_request(json!({"lineNo": "L-01"}))).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Failed to access NPT entry store"));
}

// ==================== File backend ====================

#[actix_web::test]
async fn test_file_backend_persists_across_restarts() {
    let tmp_dir = TempDir::new().unwrap();
    let data_dir = tmp_dir.path().join("data");

    let storage = JsonFileStorage::open(&data_dir, "npt-entries.json")
        .await
        .unwrap();
    let app = init_app(app_state_with(Arc::new(storage), HrisConfig::default())).await;
    let created: Value = test::read_body_json(
        test::call_service(&app, create_request(json!({"lineNo": "L-09"}))).await,
    )
    .await;

    let on_disk: Vec<NptEntry> =
        serde_json::from_slice(&std::fs::read(data_dir.join("npt-entries.json")).unwrap())
            .unwrap();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[0].line_no, "L-09");

    // A fresh process over the same directory sees the same collection
    let reopened = JsonFileStorage::open(&data_dir, "npt-entries.json")
        .await
        .unwrap();
    let app = init_app(app_state_with(Arc::new(reopened), HrisConfig::default())).await;
    let req = test::TestRequest::get().uri("/npt-entry").to_request();
    let listed: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listed["data"], json!([created["data"]]));
}

// ==================== Health / CORS ====================

#[actix_web::test]
async fn test_health() {
    let (state, _storage) = app_state_in_memory();
    let app = init_app(state).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": true, "message": "ok"}));
}

#[actix_web::test]
async fn test_cors_headers() {
    let (state, _storage) = app_state_in_memory();
    let app = init_app(state).await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/npt-entry/1")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "PUT"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );

    // Error responses carry the header too
    let req = test::TestRequest::get()
        .uri("/npt-entry/9")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
