use axum::{Json, extract::State};

use crate::{message::DocumentSummary, state::SharedState};

/// `GET /api/documents`
pub async fn list_documents_handler(
    State(state): State<SharedState>,
) -> Json<Vec<DocumentSummary>> {
    Json(state.catalog.list().to_vec())
}
