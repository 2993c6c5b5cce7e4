//! Render one purchase order as a downloadable PDF.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::GatewayError;
use crate::pdf::render_purchase_order;
use crate::AppState;

/// Fetch the named order and stream it back as a PDF attachment.
///
/// The document starts only after the upstream fetch succeeds, so a fetch
/// failure produces the standard JSON 500 with no document bytes emitted.
/// Once the response is committed there is no recovery path; a failure at
/// that point truncates the file with no error indication.
pub async fn download_pdf(
    State(state): State<AppState>,
    Path(purchase_order): Path<String>,
) -> Result<Response, GatewayError> {
    let record = state.upstream.get(&purchase_order).await?;

    let bytes = render_purchase_order(&purchase_order, &record)?;
    tracing::info!(
        purchase_order = %purchase_order,
        size = bytes.len(),
        "Purchase order PDF generated"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=PurchaseOrder_{}.pdf", purchase_order),
            ),
        ],
        bytes,
    )
        .into_response())
}
