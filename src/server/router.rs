//! Router assembly

use super::handlers::{AppState, form_rules, health_check, submit_form};
use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the intake routes
///
/// - GET  /             - the form page (`index.html` from the static dir)
/// - POST /forms        - form submission
/// - GET  /forms/rules  - validation rules for the browser script
/// - GET  /health       - store reachability
/// - GET  /healthz      - alias of /health
/// - anything else      - static files
pub fn build_intake_routes(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/forms", post(submit_form))
        .route("/forms/rules", get(form_rules))
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .with_state(state)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
