//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Structured error response body.
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
    #[error("Authentication required")]
    Unauthorized,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Username already exists!")]
    UsernameTaken,
    #[error("Email already registered!")]
    EmailTaken,
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "AUTH_REQUIRED",
                "Authentication required".to_string(),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid username or password".to_string(),
            ),
            ApiError::PasswordMismatch => (
                StatusCode::BAD_REQUEST,
                "PASSWORD_MISMATCH",
                "Passwords do not match!".to_string(),
            ),
            ApiError::UsernameTaken => (
                StatusCode::CONFLICT,
                "USERNAME_TAKEN",
                "Username already exists!".to_string(),
            ),
            ApiError::EmailTaken => (
                StatusCode::CONFLICT,
                "EMAIL_TAKEN",
                "Email already registered!".to_string(),
            ),
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                detail.clone(),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
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

impl From<crate::db::DatabaseError> for ApiError {
    fn from(err: crate::db::DatabaseError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn unauthorized_returns_401() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "AUTH_REQUIRED");
    }

    #[tokio::test]
    async fn invalid_credentials_returns_401_with_generic_message() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(json["error"]["message"], "Invalid username or password");
    }

    #[tokio::test]
    async fn password_mismatch_returns_400() {
        let response = ApiError::PasswordMismatch.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["message"], "Passwords do not match!");
    }

    #[tokio::test]
    async fn username_taken_returns_409() {
        let response = ApiError::UsernameTaken.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["message"], "Username already exists!");
    }

    #[tokio::test]
    async fn email_taken_returns_409() {
        let response = ApiError::EmailTaken.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "EMAIL_TAKEN");
    }

    #[tokio::test]
    async fn internal_returns_500_and_hides_details() {
        let response = ApiError::Internal("something broke".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        // Internal errors hide details from client
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn bad_request_returns_400() {
        let response = ApiError::BadRequest("Missing field".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
