//! In-memory `RecruitingStore` for tests. Can be switched to fail every call.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::candidate::CandidateRow;
use crate::models::recommendation::RecommendationRow;
use crate::models::report::DescriptiveResultRow;
use crate::models::resume::{NewResume, ResumeRow};
use crate::store::{FetchError, RecruitingStore};

#[derive(Default)]
pub struct InMemoryStore {
    pub candidates: Vec<CandidateRow>,
    pub resume_count: i64,
    pub probabilities: Vec<f64>,
    pub recommendations: Vec<RecommendationRow>,
    pub descriptive_results: Vec<DescriptiveResultRow>,
    pub inserted: Mutex<Vec<NewResume>>,
    pub next_resume_id: AtomicI32,
    pub failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    pub fn with_candidate(mut self, row: CandidateRow) -> Self {
        self.candidates.push(row);
        self
    }

    fn check(&self) -> Result<(), FetchError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(FetchError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }

    fn newest_first(&self) -> Vec<CandidateRow> {
        let mut rows = self.candidates.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        rows
    }
}

/// A candidate row with only the id set.
pub fn candidate(id: i32) -> CandidateRow {
    CandidateRow {
        id,
        resume_id: id,
        full_name: None,
        email: None,
        phone: None,
        skills: None,
        experience: None,
        education: None,
        uploaded_at: None,
        success_probability: None,
    }
}

pub fn candidate_with(
    id: i32,
    name: &str,
    skills: &[&str],
    experience: Value,
    probability: Option<f64>,
    uploaded_at: Option<DateTime<Utc>>,
) -> CandidateRow {
    CandidateRow {
        full_name: Some(name.to_string()),
        skills: Some(skills.iter().map(|s| s.to_string()).collect()),
        experience: Some(experience),
        success_probability: probability,
        uploaded_at,
        ..candidate(id)
    }
}

#[async_trait]
impl RecruitingStore for InMemoryStore {
    async fn count_candidates(&self) -> Result<i64, FetchError> {
        self.check()?;
        Ok(self.candidates.len() as i64)
    }

    async fn count_resumes(&self) -> Result<i64, FetchError> {
        self.check()?;
        Ok(self.resume_count)
    }

    async fn success_probabilities(&self) -> Result<Vec<f64>, FetchError> {
        self.check()?;
        Ok(self.probabilities.clone())
    }

    async fn skill_lists(&self) -> Result<Vec<Vec<String>>, FetchError> {
        self.check()?;
        Ok(self
            .candidates
            .iter()
            .filter_map(|c| c.skills.clone())
            .collect())
    }

    async fn experience_records(&self) -> Result<Vec<Option<Value>>, FetchError> {
        self.check()?;
        Ok(self.candidates.iter().map(|c| c.experience.clone()).collect())
    }

    async fn candidates(&self, limit: Option<i64>) -> Result<Vec<CandidateRow>, FetchError> {
        self.check()?;
        let mut rows = self.newest_first();
        if let Some(limit) = limit {
            rows.truncate(limit.max(0) as usize);
        }
        Ok(rows)
    }

    async fn candidate(&self, id: i32) -> Result<Option<CandidateRow>, FetchError> {
        self.check()?;
        Ok(self.candidates.iter().find(|c| c.id == id).cloned())
    }

    async fn recommendations(&self) -> Result<Vec<RecommendationRow>, FetchError> {
        self.check()?;
        Ok(self.recommendations.clone())
    }

    async fn descriptive_results(&self, limit: i64) -> Result<Vec<DescriptiveResultRow>, FetchError> {
        self.check()?;
        Ok(self
            .descriptive_results
            .iter()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, FetchError> {
        self.check()?;
        let id = self.next_resume_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = ResumeRow {
            id,
            uploader_id: resume.uploader_id,
            file_name: resume.file_name.clone(),
            uploaded_at: Some(Utc::now()),
            format: Some(resume.format.clone()),
            size_bytes: Some(resume.size_bytes),
            text_content: resume.text_content.clone(),
        };
        self.inserted
            .lock()
            .expect("inserted resumes lock poisoned")
            .push(resume);
        Ok(row)
    }
}
