use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Error surfaced to gateway callers.
///
/// Exactly one failure shape exists: status 500 with `{"error": "<message>"}`.
/// The upstream's own status code and error body are discarded on purpose —
/// an upstream 404 or 400 still comes back as a 500 carrying only the
/// message text. Callers depending on the gateway see either a 200 with data
/// or this.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Any upstream failure: transport error, non-2xx status, timeout, or a
    /// malformed upstream response body.
    #[error("{0}")]
    Upstream(String),

    /// Document generation failed before any response bytes were committed.
    #[error("{0}")]
    Render(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Upstream(err.to_string())
    }
}

impl From<printpdf::Error> for GatewayError {
    fn from(err: printpdf::Error) -> Self {
        GatewayError::Render(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
