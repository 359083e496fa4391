pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::candidates::handlers as candidates;
use crate::dashboard::handlers as dashboard;
use crate::recommendations::handlers as recommendations;
use crate::reports::handlers as reports;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.upload_body_limit();

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        .route("/api/v1/candidates", get(candidates::handle_list_candidates))
        .route("/api/v1/candidates/:id", get(candidates::handle_get_candidate))
        .route("/api/v1/reports", get(reports::handle_reports))
        .route(
            "/api/v1/recommendations",
            get(recommendations::handle_list_recommendations),
        )
        .route(
            "/api/v1/resumes",
            post(resumes::handle_upload_resumes).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
