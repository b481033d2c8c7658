//! Error taxonomy for request handling.
//!
//! Responses carry only the status and its reason phrase. Causes go to the
//! log, never to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Everything a handler or intake stage can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing route, static asset or root document.
    #[error("not found")]
    NotFound,

    /// Request body could not be decoded.
    #[error("malformed body: {0}")]
    BadRequest(String),

    /// Request body exceeded the configured limit.
    #[error("body exceeds the configured limit")]
    PayloadTooLarge,

    /// Any other runtime failure: missing upload, multipart error, disk I/O.
    #[error("unhandled server fault: {0}")]
    Fault(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Fault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Fault(format!("I/O error: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Fault(_) => tracing::error!(error = %self, "Request failed"),
            _ => tracing::debug!(error = %self, status = %status, "Request rejected"),
        }
        let reason = status.canonical_reason().unwrap_or("Error");
        (status, reason).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::PayloadTooLarge.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::Fault("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_io_error_is_fault() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, AppError::Fault(ref msg) if msg.contains("disk full")));
    }

    #[tokio::test]
    async fn test_response_hides_cause() {
        let response = AppError::Fault("secret path /var/x".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Internal Server Error");
    }
}
