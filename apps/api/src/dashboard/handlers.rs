use axum::{extract::State, Json};
use chrono::Utc;

use crate::dashboard::{dashboard_overview, DashboardOverview};
use crate::state::AppState;

/// GET /api/v1/dashboard
///
/// Never fails: every part falls back to illustrative data and says so in its `source`.
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardOverview> {
    Json(
        dashboard_overview(
            state.store.as_ref(),
            state.config.qualified_threshold,
            Utc::now(),
        )
        .await,
    )
}
