use axum::{extract::State, Json};

use crate::reports::{reports_data, ReportsData};
use crate::state::AppState;

/// GET /api/v1/reports
pub async fn handle_reports(State(state): State<AppState>) -> Json<ReportsData> {
    Json(reports_data(state.store.as_ref()).await)
}
