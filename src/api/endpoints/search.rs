//! Symptom search endpoints.
//!
//! `POST /search` — Protected: free-text symptom query against the catalog
//! `POST /check-symptoms` — Public: checkbox symptom names resolved via the
//! database; records history when a valid session token is attached

use axum::extract::State;
use axum::http::HeaderMap;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, CurrentUser};
use crate::catalog::{self, MedicationSuggestion};
use crate::db::repository;
use crate::history;

#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Deserialize)]
pub struct CheckSymptomsRequest {
    pub symptoms: Vec<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub medications: Vec<MedicationSuggestion>,
}

/// `POST /search` — Free-text search. The query is matched against the
/// catalog by substring: a medication is suggested when any of its
/// symptom tags occurs in the lowercased query.
pub async fn search(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let normalized = request.query.trim().to_lowercase();
    let medications = catalog::match_query(&request.query);

    if !medications.is_empty() {
        let names: Vec<String> = medications.iter().map(|m| m.name.clone()).collect();
        let mut conn = ctx.open_db()?;
        history::record_search(&mut conn, user.id, &normalized, &names);
    }

    Ok(Json(SearchResponse { medications }))
}

/// `POST /check-symptoms` — Checkbox search by exact symptom name.
///
/// Works without a session; when a valid bearer token is attached the
/// search is also recorded in the user's history. Unknown symptom names
/// are ignored.
pub async fn check_symptoms(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Json(request): Json<CheckSymptomsRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let conn = ctx.open_db()?;
    let matched = repository::medications_for_symptoms(&conn, &request.symptoms)?;

    if let Some(user) = ctx.authenticate(&headers)? {
        let names: Vec<String> = matched.iter().map(|m| m.name.clone()).collect();
        let mut conn = conn;
        history::record_search(&mut conn, user.id, &request.symptoms.join(","), &names);
    }

    let medications = matched
        .into_iter()
        .map(|m| MedicationSuggestion {
            name: m.name,
            description: m.description,
            dosage: m.dosage,
            warnings: m.warnings,
        })
        .collect();

    Ok(Json(SearchResponse { medications }))
}
