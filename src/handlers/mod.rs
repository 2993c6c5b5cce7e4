//! HTTP handlers for po-gateway.
//!
//! Each handler is a thin verb mapping onto one upstream call; failures are
//! converted by `GatewayError` at the endpoint boundary.

pub mod orders;
pub mod pdf;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "po-gateway",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
