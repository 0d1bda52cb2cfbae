//! Shared types for the API layer.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::auth::SessionStore;
use crate::db;
use crate::db::repository;

/// Shared context for all API routes and middleware.
///
/// Holds the database path and the in-memory session store. Handlers
/// open their own short-lived connections via `open_db`.
#[derive(Clone)]
pub struct ApiContext {
    pub db_path: Arc<PathBuf>,
    pub sessions: Arc<Mutex<SessionStore>>,
}

impl ApiContext {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            db_path: Arc::new(db_path),
            sessions: Arc::new(Mutex::new(SessionStore::new())),
        }
    }

    /// Open a connection for the current request. The schema is
    /// initialized at startup, so this skips migrations.
    pub fn open_db(&self) -> Result<rusqlite::Connection, ApiError> {
        db::open_connection(&self.db_path).map_err(ApiError::from)
    }

    /// Resolve the bearer token in `headers` to the logged-in user.
    ///
    /// Returns `Ok(None)` when the token is missing, unknown, or expired.
    /// Errors only on lock poisoning or database failure.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Option<CurrentUser>, ApiError> {
        let Some(token) = bearer_token(headers) else {
            return Ok(None);
        };

        let user_id = {
            let mut sessions = self
                .sessions
                .lock()
                .map_err(|_| ApiError::Internal("session lock".into()))?;
            sessions.resolve(token)
        };
        let Some(user_id) = user_id else {
            return Ok(None);
        };

        let conn = self.open_db()?;
        let user = repository::get_user(&conn, &user_id)?;
        Ok(user.map(|u| CurrentUser {
            id: u.id,
            username: u.username,
        }))
    }
}

/// Authenticated user context, injected into request extensions by the
/// auth middleware after session validation.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
}

/// Extract the value of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}
