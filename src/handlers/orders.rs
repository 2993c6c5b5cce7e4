//! Passthrough CRUD handlers for the purchase order collection.
//!
//! No local validation and no retries: the body and identifier go upstream
//! as-is, and the response (or the uniform error) comes straight back.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::GatewayError;
use crate::AppState;

/// List all purchase orders. Also serves `GET /`.
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Value>, GatewayError> {
    let body = state.upstream.list().await?;
    Ok(Json(body))
}

/// Create a purchase order from an upstream-shaped JSON body.
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state.upstream.create(&payload).await?;
    tracing::info!("Purchase order created");
    Ok(Json(json!({
        "message": "Purchase Order created successfully",
        "data": data,
    })))
}

/// Apply a partial update to the named purchase order.
///
/// Registered for both PUT and PATCH inbound; upstream always receives
/// PATCH so the given fields merge into the existing record.
pub async fn update_order(
    State(state): State<AppState>,
    Path(purchase_order): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state.upstream.update(&purchase_order, &payload).await?;
    tracing::info!(purchase_order = %purchase_order, "Purchase order updated");
    Ok(Json(json!({
        "message": "Purchase Order updated successfully",
        "data": data,
    })))
}

/// Delete the named purchase order.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(purchase_order): Path<String>,
) -> Result<Json<Value>, GatewayError> {
    state.upstream.delete(&purchase_order).await?;
    tracing::info!(purchase_order = %purchase_order, "Purchase order deleted");
    Ok(Json(json!({
        "message": "Purchase Order deleted successfully",
    })))
}
