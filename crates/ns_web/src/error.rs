use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Missing audio is a 404; anything else is a generic 500.
#[derive(Debug)]
pub struct ApiError(pub ns_core::Error);

impl From<ns_core::Error> for ApiError {
    fn from(error: ns_core::Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = if self.0.is_not_found() {
            (StatusCode::NOT_FOUND, "Audio file not found".to_string())
        } else {
            tracing::error!("Request failed: {}", self.0);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
