//! Helpers for driving the full router in handler tests.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::config::ClinicConfig;
use crate::{create_router, initialize_backend};

/// A router over a fresh in-memory clinic
pub async fn test_router() -> Router {
    let config = ClinicConfig::default();
    let state = initialize_backend(&config).await.expect("Failed to initialize backend");
    create_router(state, &config).expect("Failed to create router")
}

/// Send one request and decode the JSON body, or `Value::Null` if there is none
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}

/// Register Alice and Dr. Smith and book the 9AM-10AM slot; returns the appointment id
pub async fn seed_appointment(router: &Router) -> u64 {
    let (status, patient) = post(router, "/api/patients", json!({"name": "Alice", "contact": "555-1111"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, doctor) = post(
        router,
        "/api/doctors",
        json!({"name": "Dr. Smith", "specialization": "Cardiology", "slots": ["9AM-10AM"]}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, appointment) = post(
        router,
        "/api/appointments",
        json!({
            "patient_id": patient["patient"]["id"],
            "doctor_id": doctor["doctor"]["id"],
            "slot": "9AM-10AM"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    appointment["appointment"]["id"].as_u64().unwrap()
}

/// Seed an appointment, record a consultation on it and invoice it; returns the invoice id
pub async fn seed_invoice(router: &Router, fee: f64, item_lines: &[&str]) -> u64 {
    let appointment_id = seed_appointment(router).await;
    let (status, consultation) = post(
        router,
        "/api/consultations",
        json!({"appointment_id": appointment_id, "consultation_fee": fee, "item_lines": item_lines}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, invoice) = post(
        router,
        "/api/invoices",
        json!({"consultation_id": consultation["consultation"]["id"]}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    invoice["invoice"]["id"].as_u64().unwrap()
}
