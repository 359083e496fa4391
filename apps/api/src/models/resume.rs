use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `curriculums`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: i32,
    pub uploader_id: i32,
    pub file_name: String,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub format: Option<String>,
    pub size_bytes: Option<i64>,
    #[serde(skip_serializing)]
    pub text_content: Option<String>,
}

/// Values for a new `curriculums` row. The upload time comes from the database clock.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub uploader_id: i32,
    pub file_name: String,
    pub format: String,
    pub size_bytes: i64,
    pub text_content: Option<String>,
}
