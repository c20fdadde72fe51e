use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use matching_engine::SubmitError;
use serde_json::json;
use thiserror::Error;

/// Central error type for the gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Rejected(#[from] SubmitError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::Rejected(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                err.to_string(),
                "ORDER_REJECTED",
            ),
        };

        let body = Json(json!({
            "success": false,
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}
