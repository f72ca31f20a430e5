//! # REST API for Invoices

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::GenerateInvoiceRequest;
use tracing::info;

use super::error_response;
use super::mappers::invoice_mapper::InvoiceMapper;
use crate::domain::models::{EntityKind, InvoiceId};
use crate::domain::ClinicError;
use crate::AppState;

/// Issue the invoice for a consultation
pub async fn generate_invoice(
    State(state): State<AppState>,
    Json(request): Json<GenerateInvoiceRequest>,
) -> impl IntoResponse {
    info!("POST /api/invoices - request: {:?}", request);

    let command = InvoiceMapper::to_generate_command(request);
    match state.invoice_service.generate_invoice(command).await {
        Ok(summary) => {
            let response = InvoiceMapper::to_invoice_response_dto(summary, "Invoice generated successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Get an invoice by ID with its current total
pub async fn get_invoice(State(state): State<AppState>, Path(invoice_id): Path<u64>) -> impl IntoResponse {
    info!("GET /api/invoices/{}", invoice_id);

    match state.invoice_service.get_invoice(InvoiceId(invoice_id)).await {
        Ok(Some(summary)) => (StatusCode::OK, Json(InvoiceMapper::to_dto(summary))).into_response(),
        Ok(None) => error_response(ClinicError::not_found(EntityKind::Invoice, invoice_id)),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_utils::{get, post, seed_invoice, test_router};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_invoice_total_includes_tax() {
        let router = test_router().await;
        let invoice_id = seed_invoice(&router, 20.0, &["Paracetamol,5.0", "Bandage,2.5"]).await;

        let (status, body) = get(&router, &format!("/api/invoices/{}", invoice_id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 30.25);
        assert_eq!(body["tax_rate"], 0.1);
        assert_eq!(body["closed"], false);
    }

    #[tokio::test]
    async fn test_second_invoice_is_409() {
        let router = test_router().await;
        seed_invoice(&router, 50.0, &[]).await;

        let (status, body) = post(&router, "/api/invoices", json!({"consultation_id": 1})).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["kind"], "invoice_already_exists");
    }

    #[tokio::test]
    async fn test_unknown_consultation_and_invoice() {
        let router = test_router().await;

        let (status, _) = post(&router, "/api/invoices", json!({"consultation_id": 3})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, body) = get(&router, "/api/invoices/3").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Invoice not found: 3");
    }
}
