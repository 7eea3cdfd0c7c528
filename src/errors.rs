use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::domain::resources::ResourceRef;

/// Errors raised by the mock server handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("bad request")]
    BadRequest,
    #[error("internal error")]
    Internal { code: &'static str, message: String },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            code: "internal_error",
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            Self::BadRequest => StatusCode::BAD_REQUEST.into_response(),
            Self::Internal { code, message } => {
                tracing::error!(error = %message, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        code: code.to_string(),
                        message: "internal server error".to_string(),
                        details: json!({}),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Errors surfaced by the client SDK.
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Failed to fetch logs: {status} {reason}")]
    FetchFailure { status: u16, reason: String },

    #[error("Bad status for {reference}: {status:?}")]
    BadStatus {
        reference: String,
        status: Option<String>,
    },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SdkError {
    pub fn bad_status(reference: &ResourceRef, status: Option<&str>) -> Self {
        Self::BadStatus {
            reference: reference.to_string(),
            status: status.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;
    use crate::domain::resources::ResourceKind;

    #[tokio::test]
    async fn not_found_renders_plain_text() {
        let response = AppError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("collect body");
        assert_eq!(body, "Not Found");
    }

    #[tokio::test]
    async fn bad_request_has_empty_body() {
        let response = AppError::BadRequest.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("collect body");
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn internal_error_hides_message() {
        let response = AppError::internal("disk on fire").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("collect body");
        let body_json: serde_json::Value =
            serde_json::from_slice(&body).expect("valid json response");
        assert_eq!(body_json["code"], "internal_error");
        assert_eq!(body_json["message"], "internal server error");
    }

    #[test]
    fn fetch_failure_message_carries_status_and_reason() {
        let err = SdkError::FetchFailure {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch logs: 500 Internal Server Error"
        );
    }

    #[test]
    fn bad_status_names_the_reference() {
        let reference = ResourceRef::new(ResourceKind::Vm, "100000");
        let err = SdkError::bad_status(&reference, Some("degraded"));

        assert!(matches!(
            &err,
            SdkError::BadStatus { reference, status }
                if reference == "vm:100000" && status.as_deref() == Some("degraded")
        ));
    }
}
