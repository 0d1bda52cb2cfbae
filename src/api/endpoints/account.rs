//! Account endpoints: registration, login, logout.
//!
//! `POST /register` — Public: create an account
//! `POST /login` — Public: exchange credentials for a session token
//! `GET /logout` — Protected: revoke the current session

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{bearer_token, ApiContext};
use crate::auth::password;
use crate::db::repository;
use crate::models::User;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// `POST /register` — Create a new account.
///
/// Validation order matches the user-facing messages: password
/// confirmation first, then username uniqueness, then email uniqueness.
pub async fn register(
    State(ctx): State<ApiContext>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let username = request.username.trim().to_string();
    let email = request.email.trim().to_string();

    if username.is_empty() || email.is_empty() || request.password.is_empty() {
        return Err(ApiError::BadRequest("All fields are required".into()));
    }
    if request.password != request.confirm_password {
        return Err(ApiError::PasswordMismatch);
    }

    let conn = ctx.open_db()?;
    if repository::get_user_by_username(&conn, &username)?.is_some() {
        return Err(ApiError::UsernameTaken);
    }
    if repository::get_user_by_email(&conn, &email)?.is_some() {
        return Err(ApiError::EmailTaken);
    }

    // Key stretching is CPU-bound; keep it off the async runtime.
    let password_hash = tokio::task::spawn_blocking(move || {
        password::hash_password(&request.password)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("hash task: {e}")))?;

    let user = User {
        id: Uuid::new_v4(),
        username,
        email,
        password_hash,
        created_at: Utc::now().naive_utc(),
    };
    repository::insert_user(&conn, &user)?;

    tracing::info!(username = %user.username, "New account registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful! Please login.".into(),
        }),
    ))
}

/// `POST /login` — Verify credentials and issue a session token.
///
/// Unknown usernames and wrong passwords both return the same generic
/// 401 so the response does not leak which accounts exist.
pub async fn login(
    State(ctx): State<ApiContext>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let conn = ctx.open_db()?;
    let user = repository::get_user_by_username(&conn, request.username.trim())?
        .ok_or(ApiError::InvalidCredentials)?;

    let stored = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || {
        password::verify_password(&request.password, &stored)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("verify task: {e}")))?;

    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    let token = {
        let mut sessions = ctx
            .sessions
            .lock()
            .map_err(|_| ApiError::Internal("session lock".into()))?;
        sessions.issue(user.id)
    };

    tracing::info!(username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        token,
        username: user.username,
    }))
}

/// `GET /logout` — Revoke the session behind the bearer token.
pub async fn logout(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, ApiError> {
    if let Some(token) = bearer_token(&headers) {
        let mut sessions = ctx
            .sessions
            .lock()
            .map_err(|_| ApiError::Internal("session lock".into()))?;
        sessions.revoke(token);
    }

    Ok(Json(MessageResponse {
        message: "You have been logged out.".into(),
    }))
}
