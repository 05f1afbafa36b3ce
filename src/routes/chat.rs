use axum::{
    Json,
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
};
use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::responder::generate_reply,
};

// A missing or malformed body is read as an empty message; only a body
// that could not be read at all is an error.
pub async fn chat_handler(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::BytesRejection(err)) => return Err(unreadable_body(err)),
        Err(rejection) => {
            tracing::debug!(
                reason = %rejection.body_text(),
                "unusable chat body, using empty message"
            );
            ChatRequest::default()
        }
    };

    Ok(Json(generate_reply(&request.message)))
}

fn unreadable_body(err: BytesRejection) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
