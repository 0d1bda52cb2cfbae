//! Application router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//!
//! Protected routes sit behind the session auth middleware; public routes
//! (login, registration, the symptom checker) only get the shared state.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the application router.
///
/// Middleware uses `Extension<ApiContext>` (injected as the outermost
/// layer of the protected routes). Endpoint handlers use
/// `State<ApiContext>` (provided via `with_state`).
pub fn app_router(ctx: ApiContext) -> Router {
    let protected = Router::new()
        .route("/home", get(endpoints::pages::home))
        .route("/logout", get(endpoints::account::logout))
        .route(
            "/search",
            get(endpoints::pages::search_page).post(endpoints::search::search),
        )
        .route("/profile", get(endpoints::profile::view))
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::auth::require_auth))
        // Extension must be outermost so the middleware can extract ApiContext
        .layer(axum::Extension(ctx.clone()));

    let public = Router::new()
        .route("/", get(endpoints::pages::index))
        .route(
            "/login",
            get(endpoints::pages::login_page).post(endpoints::account::login),
        )
        .route(
            "/register",
            get(endpoints::pages::register_page).post(endpoints::account::register),
        )
        .route("/symptom-checker", get(endpoints::pages::symptom_checker))
        .route("/check-symptoms", post(endpoints::search::check_symptoms))
        .route("/about", get(endpoints::pages::about))
        .route("/contact", get(endpoints::pages::contact))
        .with_state(ctx);

    protected.merge(public).layer(CorsLayer::permissive())
}
