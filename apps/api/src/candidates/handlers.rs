use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

use crate::analytics::Sourced;
use crate::candidates::{
    candidate_detail, list_candidates, CandidateDetail, CandidateQuery, CandidateSummary,
};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/candidates?search=&sort=name|date|score&direction=asc|desc
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateQuery>,
) -> Json<Sourced<Vec<CandidateSummary>>> {
    Json(list_candidates(state.store.as_ref(), &query, Utc::now()).await)
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CandidateDetail>, AppError> {
    let detail = candidate_detail(state.store.as_ref(), id, Utc::now()).await?;
    Ok(Json(detail))
}
