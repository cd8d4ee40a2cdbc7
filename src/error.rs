use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::BytesRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::storage::StorageError;
use crate::translate::ErrorResponse;

/// Message returned to clients for every handler failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("unreadable multipart request: {0}")]
    MultipartRequest(#[from] MultipartRejection),

    #[error("unreadable request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON body must be an object or an array")]
    JsonNotObject,

    #[error("more than one audio file in request")]
    DuplicateAudio,

    #[error("unexpected file field {0:?}")]
    UnexpectedFile(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The cause stays in the server log; clients only ever see the generic body.
        error!("Request failed: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                ok: false,
                error: INTERNAL_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn every_error_renders_the_same_opaque_body() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/srv/uploads denied");
        let response = ApiError::from(StorageError::from(io)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, serde_json::json!({"ok": false, "error": "Internal server error"}));
        assert!(!String::from_utf8_lossy(&body).contains("uploads"));
    }

    #[tokio::test]
    async fn form_errors_are_server_errors() {
        for err in [
            ApiError::DuplicateAudio,
            ApiError::UnexpectedFile("file".to_string()),
            ApiError::JsonNotObject,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
