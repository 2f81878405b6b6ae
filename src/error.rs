//! HTTP-facing errors. Every variant renders as `{"error": "..."}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request was well-formed JSON but failed validation.
    #[error("{0}")]
    BadRequest(String),

    /// Body missing, not JSON, or the wrong shape.
    #[error("{0}")]
    InvalidJson(#[from] JsonRejection),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(rejection) => rejection.status(),
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_status_and_message() {
        let error = ApiError::BadRequest("no text".to_string());
        assert_eq!(error.to_string(), "no text");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
