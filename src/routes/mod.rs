// src/routes/mod.rs
pub mod chat;
pub mod documents;
pub mod index;

use crate::{error::AppError, state::SharedState};
use axum::{
    Router,
    extract::{DefaultBodyLimit, OriginalUri},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::chat_handler;
use documents::list_documents_handler;
use index::index_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(state: SharedState) -> Router {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/documents", get(list_documents_handler))
        .fallback(api_not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes));

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

// `/api/` slips past the nested router, so API paths are re-checked here.
async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        AppError::NotFound(path.to_string()).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
