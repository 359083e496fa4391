use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// One row of `resultados_descriptivos`: a stored batch-analysis summary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DescriptiveResultRow {
    pub id: i32,
    pub cvs_processed: Option<i32>,
    pub average_experience: Option<Value>,
    pub analysed_at: Option<DateTime<Utc>>,
    pub top_skills: Option<Vec<String>>,
}
