//! API error type with structured JSON responses.
//!
//! Every error body has the shape `{ "error": { "code", "message" } }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use triage_contracts::TriageError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail),
            ApiError::UpstreamUnavailable(detail) => {
                tracing::warn!(detail = %detail, "upstream unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_UNAVAILABLE",
                    detail,
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<TriageError> for ApiError {
    fn from(err: TriageError) -> Self {
        match err {
            TriageError::InvalidInput { reason } => ApiError::BadRequest(reason),
            TriageError::Upstream { .. } => ApiError::UpstreamUnavailable(err.to_string()),
            TriageError::Config { .. } | TriageError::QueueUnavailable { .. } => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn json_of(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn bad_request_returns_400() {
        let response = ApiError::BadRequest("Primary symptoms are required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_of(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert_eq!(json["error"]["message"], "Primary symptoms are required");
    }

    #[tokio::test]
    async fn not_found_returns_404() {
        let response = ApiError::NotFound("No data found for country: x".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn internal_hides_detail() {
        let response = ApiError::Internal("lock poisoned".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_of(response).await;
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn triage_errors_map_to_status() {
        let invalid: ApiError = TriageError::invalid_input("Primary symptoms are required").into();
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let upstream: ApiError = TriageError::upstream("disease.sh", "timeout").into();
        let response = upstream.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_of(response).await["error"]["code"], "UPSTREAM_UNAVAILABLE");

        let queue: ApiError = TriageError::QueueUnavailable { reason: "poisoned".into() }.into();
        assert!(matches!(queue, ApiError::Internal(_)));
    }
}
