//! Tests de la superficie HTTP, corriendo el router real sobre el store
//! en memoria (sin PostgreSQL).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use estimates_api::repositories::memory::{FailingStore, InMemoryEstimateStore};
use estimates_api::routes::create_app;
use estimates_api::services::estimates_service::{
    ERROR_CODE_CREATE_VALIDATION, ERROR_CODE_UPDATE_VALIDATION,
};
use estimates_api::state::AppState;
use estimates_api::utils::errors::error_codes;

fn test_app() -> Router {
    create_app(AppState::new(Arc::new(InMemoryEstimateStore::new())))
}

fn estimate_payload() -> Value {
    json!({
        "first_name": "John",
        "last_name": "Doe",
        "car_type": "Truck",
        "year": "2013",
        "model": "SomeModelHere",
        "license_plate": "ABCD-123",
        "status": "Pending",
    })
}

/// Ejecuta un request y devuelve (status, location, body JSON o Null)
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Option<String>, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(value.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        // Los rechazos del framework (p. ej. un UUID malformado en la
        // ruta) llegan como texto plano, no como JSON
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, location, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let (status, _, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "estimates-api");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_estimate_returns_201_with_location() {
    let app = test_app();
    let (status, location, body) = send(&app, "POST", "/estimates", Some(&estimate_payload())).await;

    assert_eq!(status, StatusCode::CREATED);

    // El body es el estimate creado, con id asignado y el resto intacto
    let id = body["id"].as_str().unwrap();
    assert_ne!(id, "00000000-0000-0000-0000-000000000000");
    assert_eq!(body["first_name"], "John");
    assert_eq!(body["last_name"], "Doe");
    assert_eq!(body["car_type"], "Truck");
    assert_eq!(body["year"], "2013");
    assert_eq!(body["model"], "SomeModelHere");
    assert_eq!(body["license_plate"], "ABCD-123");
    assert_eq!(body["status"], "Pending");

    assert_eq!(location.unwrap(), format!("/estimates/{}", id));
}

#[tokio::test]
async fn test_create_estimate_with_sent_status_returns_400() {
    let app = test_app();
    let mut payload = estimate_payload();
    payload["status"] = json!("Sent");

    let (status, _, body) = send(&app, "POST", "/estimates", Some(&payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ERROR_CODE_CREATE_VALIDATION);
    assert!(body["errors"]["status"][0].is_string());
}

#[tokio::test]
async fn test_create_estimate_with_invalid_field_returns_400() {
    let app = test_app();
    let mut payload = estimate_payload();
    payload["first_name"] = json!("");

    let (status, _, body) = send(&app, "POST", "/estimates", Some(&payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["first_name"][0].is_string());
}

#[tokio::test]
async fn test_get_created_estimate_returns_200() {
    let app = test_app();
    let (_, _, created) = send(&app, "POST", "/estimates", Some(&estimate_payload())).await;
    let id = created["id"].as_str().unwrap();

    let (status, _, body) = send(&app, "GET", &format!("/estimates/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_unknown_estimate_returns_404_with_empty_body() {
    let app = test_app();
    let (status, _, body) = send(
        &app,
        "GET",
        "/estimates/7a0bd00f-6b0a-4cff-ae4f-4bd24adf9e2a",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_get_with_malformed_id_returns_400() {
    let app = test_app();
    let (status, _, body) = send(&app, "GET", "/estimates/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    // El rechazo viene del framework como texto plano, no como JSON
    assert!(body.is_string());
}

#[tokio::test]
async fn test_update_with_mismatched_ids_returns_400_before_service() {
    let app = test_app();
    let mut payload = estimate_payload();
    payload["id"] = json!("7a0bd00f-6b0a-4cff-ae4f-4bd24adf9e2a");

    let (status, _, _) = send(
        &app,
        "PUT",
        "/estimates/11f8c2aa-93d5-4eb8-9d2a-51b8c0a5e7a3",
        Some(&payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_estimate_returns_400_on_id_field() {
    let app = test_app();
    let id = "7a0bd00f-6b0a-4cff-ae4f-4bd24adf9e2a";
    let mut payload = estimate_payload();
    payload["id"] = json!(id);

    let (status, _, body) = send(&app, "PUT", &format!("/estimates/{}", id), Some(&payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ERROR_CODE_UPDATE_VALIDATION);
    assert!(body["errors"]["id"][0].is_string());
}

#[tokio::test]
async fn test_update_existing_estimate_returns_200_without_location() {
    let app = test_app();
    let (_, _, created) = send(&app, "POST", "/estimates", Some(&estimate_payload())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut payload = estimate_payload();
    payload["id"] = json!(id);
    payload["first_name"] = json!("Jane");
    payload["status"] = json!("BookConfirmed");

    let (status, location, body) =
        send(&app, "PUT", &format!("/estimates/{}", id), Some(&payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(location.is_none());
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["first_name"], "Jane");
    assert_eq!(body["status"], "BookConfirmed");

    // El overlay quedó persistido
    let (_, _, stored) = send(&app, "GET", &format!("/estimates/{}", id), None).await;
    assert_eq!(stored, body);
}

#[tokio::test]
async fn test_create_with_failing_store_returns_500_with_sentinel_code() {
    let store = FailingStore::failing_writes(InMemoryEstimateStore::new());
    let app = create_app(AppState::new(Arc::new(store)));

    let (status, _, body) = send(&app, "POST", "/estimates", Some(&estimate_payload())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], error_codes::DATABASE_UPDATE_ERROR);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to update the database:"));
}
