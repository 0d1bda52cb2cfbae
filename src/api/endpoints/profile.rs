//! Profile endpoint.
//!
//! `GET /profile` — Protected: the user's search history, newest first.

use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, CurrentUser};
use crate::db::repository;

#[derive(Serialize)]
pub struct HistoryEntry {
    pub symptoms: String,
    pub medications: String,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub history: Vec<HistoryEntry>,
}

pub async fn view(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let conn = ctx.open_db()?;
    let history = repository::get_history_for_user(&conn, &user.id)?
        .into_iter()
        .map(|h| HistoryEntry {
            symptoms: h.symptoms,
            medications: h.medications,
            timestamp: h.timestamp.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    Ok(Json(ProfileResponse {
        username: user.username,
        history,
    }))
}
