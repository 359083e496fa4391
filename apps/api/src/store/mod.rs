//! Data Store: the only boundary to the hosted relational backend.
//!
//! Every read the dashboard needs sits behind `RecruitingStore`, which `AppState`
//! carries as `Arc<dyn RecruitingStore>`. The Postgres implementation issues plain
//! queries; there are no retries and no per-query timeouts beyond the pool's own.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::candidate::CandidateRow;
use crate::models::recommendation::RecommendationRow;
use crate::models::report::DescriptiveResultRow;
use crate::models::resume::{NewResume, ResumeRow};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait RecruitingStore: Send + Sync {
    async fn count_candidates(&self) -> Result<i64, FetchError>;

    async fn count_resumes(&self) -> Result<i64, FetchError>;

    /// Every recorded success probability (0-100), nulls excluded.
    async fn success_probabilities(&self) -> Result<Vec<f64>, FetchError>;

    /// One skill list per candidate that has one.
    async fn skill_lists(&self) -> Result<Vec<Vec<String>>, FetchError>;

    /// One experience value per candidate, `None` where nothing was extracted.
    async fn experience_records(&self) -> Result<Vec<Option<serde_json::Value>>, FetchError>;

    /// Candidates newest first, optionally capped at `limit`.
    async fn candidates(&self, limit: Option<i64>) -> Result<Vec<CandidateRow>, FetchError>;

    async fn candidate(&self, id: i32) -> Result<Option<CandidateRow>, FetchError>;

    /// Recommendations newest first.
    async fn recommendations(&self) -> Result<Vec<RecommendationRow>, FetchError>;

    /// Stored analysis summaries newest first, capped at `limit`.
    async fn descriptive_results(&self, limit: i64) -> Result<Vec<DescriptiveResultRow>, FetchError>;

    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, FetchError>;
}
