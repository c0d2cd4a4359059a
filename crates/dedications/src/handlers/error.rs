use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use dedications_core::storage::repository_error_to_status_code;

use crate::service::ServiceError;

/// `{ "error": message }` with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Storage(err) => {
                StatusCode::from_u16(repository_error_to_status_code(err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Storage error");
        } else {
            tracing::warn!(status = %status, message = %self, "API error");
        }

        error_response(status, self.to_string())
    }
}

/// Response for a body that is not valid JSON for the expected request type.
pub fn invalid_json_response(err: serde_json::Error) -> Response {
    let message = format!("Invalid JSON body: {err}");
    tracing::warn!(status = %StatusCode::BAD_REQUEST, message = %message, "Invalid JSON body");
    error_response(StatusCode::BAD_REQUEST, message)
}
