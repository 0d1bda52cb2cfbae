//! Session authentication middleware.
//!
//! Extracts `Authorization: Bearer <token>`, resolves it against the
//! session store, and injects `CurrentUser` into request extensions
//! for downstream handlers.

use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// Require a valid session token.
///
/// Accesses `ApiContext` from request extensions (injected by Extension layer).
/// On success: injects `CurrentUser` for the handler.
pub async fn require_auth(req: Request<axum::body::Body>, next: Next) -> Response {
    match require_auth_inner(req, next).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn require_auth_inner(
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx: ApiContext = req
        .extensions()
        .get::<ApiContext>()
        .cloned()
        .ok_or(ApiError::Internal("missing API context".into()))?;

    let user = ctx
        .authenticate(req.headers())?
        .ok_or(ApiError::Unauthorized)?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
