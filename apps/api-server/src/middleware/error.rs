//! Error handling - every failure leaves the API as `{ "message": ... }`.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use quill_shared::MessageResponse;
use thiserror::Error;

use quill_core::RepoError;

/// Application-level error type rendered as a `MessageResponse`.
///
/// The Display text is the message sent to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// Create/update failures and malformed request bodies.
    #[error("{0}")]
    BadRequest(String),

    /// Read/delete failures.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    /// A repository failure on the write path (create, update).
    pub fn write_failed(err: RepoError) -> Self {
        tracing::warn!(error = %err, "Post write failed");
        AppError::BadRequest(err.to_string())
    }

    /// A repository failure on the read path (list, get, delete).
    pub fn read_failed(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }

        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.to_string()))
    }
}

/// Rejects unreadable JSON bodies before they reach a handler.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    AppError::BadRequest(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[actix_web::test]
    async fn renders_message_body() {
        let response = AppError::not_found("Post not found").error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Post not found" }));
    }

    #[test]
    fn read_and_write_failures_split_400_500() {
        let write = AppError::write_failed(RepoError::Query("boom".to_string()));
        let read = AppError::read_failed(RepoError::Query("boom".to_string()));

        assert_eq!(write.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(read.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read.to_string(), "Query execution failed: boom");
    }
}
