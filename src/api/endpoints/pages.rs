//! Page endpoints: landing redirect, dashboard, and static page descriptors.
//!
//! `GET /` — Redirects to `/home` or `/login` depending on session
//! `GET /home` — Protected: dashboard summary for the logged-in user
//! `GET /symptom-checker` — Public: selectable symptom list

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Redirect;
use axum::{Extension, Json};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, CurrentUser};
use crate::db::repository;

/// Static descriptor for pages without dynamic content.
#[derive(Serialize)]
pub struct PageInfo {
    pub page: &'static str,
    pub title: &'static str,
}

#[derive(Serialize)]
pub struct HomeResponse {
    pub username: String,
    pub history_count: i64,
}

#[derive(Serialize)]
pub struct SymptomOption {
    pub name: String,
    pub category: String,
}

#[derive(Serialize)]
pub struct SymptomCheckerResponse {
    pub symptoms: Vec<SymptomOption>,
}

/// `GET /` — Landing redirect: logged-in users go to the dashboard,
/// everyone else to the login page.
pub async fn index(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
) -> Result<Redirect, ApiError> {
    if ctx.authenticate(&headers)?.is_some() {
        Ok(Redirect::to("/home"))
    } else {
        Ok(Redirect::to("/login"))
    }
}

/// `GET /home` — Dashboard summary.
pub async fn home(
    State(ctx): State<ApiContext>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<HomeResponse>, ApiError> {
    let conn = ctx.open_db()?;
    let history_count = repository::count_history_for_user(&conn, &user.id)?;
    Ok(Json(HomeResponse {
        username: user.username,
        history_count,
    }))
}

/// `GET /symptom-checker` — All known symptoms with their categories,
/// for the checkbox-based checker.
pub async fn symptom_checker(
    State(ctx): State<ApiContext>,
) -> Result<Json<SymptomCheckerResponse>, ApiError> {
    let conn = ctx.open_db()?;
    let symptoms = repository::get_all_symptoms(&conn)?
        .into_iter()
        .map(|s| SymptomOption {
            name: s.name,
            category: s.category,
        })
        .collect();
    Ok(Json(SymptomCheckerResponse { symptoms }))
}

pub async fn login_page() -> Json<PageInfo> {
    Json(PageInfo {
        page: "login",
        title: "Login",
    })
}

pub async fn register_page() -> Json<PageInfo> {
    Json(PageInfo {
        page: "register",
        title: "Register",
    })
}

pub async fn search_page() -> Json<PageInfo> {
    Json(PageInfo {
        page: "search",
        title: "Symptom Search",
    })
}

pub async fn about() -> Json<PageInfo> {
    Json(PageInfo {
        page: "about",
        title: "About",
    })
}

pub async fn contact() -> Json<PageInfo> {
    Json(PageInfo {
        page: "contact",
        title: "Contact",
    })
}
