//! Axum router construction for the lookup API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin browser clients. Department route paths come
//! from [`Department`] so they always agree with the advertised metadata.

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use roster_types::Department;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the lookup server.
///
/// The router includes:
/// - `GET /ping` -- liveness check
/// - `GET /departments` -- metadata for every department
/// - `GET /seattle/officer` -- Seattle exact lookup
/// - `GET /seattle/officer/search` -- Seattle fuzzy search
/// - `GET /tacoma/officer` -- Tacoma exact lookup
/// - `GET /tacoma/officer/search` -- Tacoma fuzzy search
///
/// The API is read-only and public, so CORS allows any origin for `GET`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/departments", get(handlers::describe_departments))
        // Seattle
        .route(
            &Department::Seattle.exact_path(),
            get(handlers::seattle_officer),
        )
        .route(
            &Department::Seattle.fuzzy_path(),
            get(handlers::seattle_officer_search),
        )
        // Tacoma
        .route(
            &Department::Tacoma.exact_path(),
            get(handlers::tacoma_officer),
        )
        .route(
            &Department::Tacoma.fuzzy_path(),
            get(handlers::tacoma_officer_search),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
