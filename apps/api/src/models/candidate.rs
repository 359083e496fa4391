use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// One row of `datos_postulantes`, joined with its résumé upload time and prediction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: i32,
    pub resume_id: i32,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    /// Free-form experience list as extracted from the résumé. Shape varies per record.
    pub experience: Option<Value>,
    pub education: Option<Value>,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub success_probability: Option<f64>,
}
