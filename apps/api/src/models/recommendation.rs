use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `recomendaciones`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecommendationRow {
    pub id: i32,
    pub message: String,
    pub description: Option<String>,
    pub kind: String,
    pub created_at: Option<DateTime<Utc>>,
}
