use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::analytics::Sourced;
use crate::errors::AppError;
use crate::recommendations::{
    list_recommendations, Category, ImpactTier, ImplementationStatus, RecommendationFilter,
    RecommendationItem,
};
use crate::state::AppState;

/// Comma-separated filter sets, e.g. `?impact=High,Medium&category=Skills`.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    pub impact: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl RecommendationQuery {
    fn into_filter(self) -> Result<RecommendationFilter, AppError> {
        Ok(RecommendationFilter {
            impact: parse_set(self.impact, "impact", ImpactTier::parse)?,
            category: parse_set(self.category, "category", Category::parse)?,
            status: parse_set(self.status, "status", ImplementationStatus::parse)?,
        })
    }
}

fn parse_set<T>(
    raw: Option<String>,
    param: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            parse(v).ok_or_else(|| AppError::Validation(format!("Unknown {param} value '{v}'")))
        })
        .collect()
}

/// GET /api/v1/recommendations
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<Sourced<Vec<RecommendationItem>>>, AppError> {
    let filter = query.into_filter()?;
    Ok(Json(list_recommendations(state.store.as_ref(), &filter).await))
}
