//! Candidates: per-request summaries derived from stored candidate rows.
//!
//! A summary folds the free-form experience list into a total year count and a
//! headline position, and fills a placeholder score when no prediction exists.

pub mod handlers;

use std::cmp::Ordering;
use std::ops::Range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analytics::{or_illustrative, Sourced};
use crate::errors::AppError;
use crate::experience::{primary_title, title_of, total_years, years_of};
use crate::models::candidate::CandidateRow;
use crate::store::RecruitingStore;

pub const UNNAMED_CANDIDATE: &str = "Unnamed candidate";

/// Placeholder score range for candidates without a prediction in the full list.
const LIST_SCORE_RANGE: Range<u32> = 70..100;
/// Placeholder score range on the dashboard's recent-candidate card.
const RECENT_SCORE_RANGE: Range<u32> = 75..95;
const RECENT_LIMIT: i64 = 3;

#[derive(Debug, Clone, Serialize)]
pub struct CandidateSummary {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub experience_years: f64,
    pub skills: Vec<String>,
    pub score: f64,
    pub uploaded_at: DateTime<Utc>,
}

impl CandidateSummary {
    pub fn from_row(row: &CandidateRow, now: DateTime<Utc>) -> Self {
        let experience = row.experience.as_ref();
        CandidateSummary {
            id: row.id,
            name: display_name(row),
            position: primary_title(experience).to_string(),
            experience_years: round_one_decimal(total_years(experience)),
            skills: row.skills.clone().unwrap_or_default(),
            score: row
                .success_probability
                .unwrap_or_else(|| placeholder_score(row.id, LIST_SCORE_RANGE)),
            uploaded_at: row.uploaded_at.unwrap_or(now),
        }
    }
}

/// Stand-in score for a candidate with no prediction.
///
/// Pseudo-random within `range` but derived from the candidate id, so repeated
/// requests show the same number.
pub fn placeholder_score(candidate_id: i32, range: Range<u32>) -> f64 {
    let span = range.end.saturating_sub(range.start).max(1);
    // Knuth multiplicative hash, then fold the high bits down.
    let mut h = (candidate_id as u32).wrapping_mul(0x9E37_79B1);
    h ^= h >> 16;
    f64::from(range.start + h % span)
}

fn display_name(row: &CandidateRow) -> String {
    row.full_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(UNNAMED_CANDIDATE)
        .to_string()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// List: search and sort
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    #[default]
    Date,
    Score,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl CandidateQuery {
    /// Case-insensitive substring match over name, position and skills.
    fn matches(&self, candidate: &CandidateSummary) -> bool {
        let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return true;
        };
        let term = term.to_lowercase();
        candidate.name.to_lowercase().contains(&term)
            || candidate.position.to_lowercase().contains(&term)
            || candidate
                .skills
                .iter()
                .any(|s| s.to_lowercase().contains(&term))
    }

    fn compare(&self, a: &CandidateSummary, b: &CandidateSummary) -> Ordering {
        let ordering = match self.sort {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Date => a.uploaded_at.cmp(&b.uploaded_at),
            SortField::Score => a.score.total_cmp(&b.score),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn apply(&self, mut candidates: Vec<CandidateSummary>) -> Vec<CandidateSummary> {
        candidates.retain(|c| self.matches(c));
        candidates.sort_by(|a, b| self.compare(a, b));
        candidates
    }
}

/// All candidates as summaries, filtered and sorted per `query`.
/// A failed fetch degrades to an empty list tagged `fetch_failed`.
pub async fn list_candidates(
    store: &dyn RecruitingStore,
    query: &CandidateQuery,
    now: DateTime<Utc>,
) -> Sourced<Vec<CandidateSummary>> {
    let result = store.candidates(None).await.map(|rows| {
        let summaries = rows
            .iter()
            .map(|row| CandidateSummary::from_row(row, now))
            .collect();
        query.apply(summaries)
    });
    or_illustrative(result, "candidates", Vec::new)
}

// ────────────────────────────────────────────────────────────────────────────
// Detail
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    pub title: String,
    pub years: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateDetail {
    #[serde(flatten)]
    pub summary: CandidateSummary,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub education: Option<Value>,
    pub experience: Vec<ExperienceView>,
}

pub async fn candidate_detail(
    store: &dyn RecruitingStore,
    id: i32,
    now: DateTime<Utc>,
) -> Result<CandidateDetail, AppError> {
    let row = store
        .candidate(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;

    let experience = row
        .experience
        .as_ref()
        .and_then(Value::as_array)
        .map(|records| {
            records
                .iter()
                .filter(|r| r.is_object())
                .map(|r| ExperienceView {
                    title: title_of(r).to_string(),
                    years: years_of(r),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(CandidateDetail {
        summary: CandidateSummary::from_row(&row, now),
        email: row.email,
        phone: row.phone,
        education: row.education,
        experience,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Recent candidates (dashboard card)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RecentCandidate {
    pub id: String,
    pub name: String,
    pub position: String,
    pub score: f64,
    pub uploaded: String,
}

impl RecentCandidate {
    fn from_row(row: &CandidateRow, now: DateTime<Utc>) -> Self {
        RecentCandidate {
            id: row.id.to_string(),
            name: display_name(row),
            position: primary_title(row.experience.as_ref()).to_string(),
            score: row
                .success_probability
                .unwrap_or_else(|| placeholder_score(row.id, RECENT_SCORE_RANGE)),
            uploaded: time_ago(row.uploaded_at, now),
        }
    }

    fn illustrative() -> Vec<Self> {
        crate::analytics::fallback::RECENT_CANDIDATES
            .iter()
            .enumerate()
            .map(|(i, (name, position, score, date))| RecentCandidate {
                id: (i + 1).to_string(),
                name: name.to_string(),
                position: position.to_string(),
                score: f64::from(*score),
                uploaded: date.to_string(),
            })
            .collect()
    }
}

/// Relative upload label: "Less than an hour ago", "3 hours ago", "1 day ago", ...
pub fn time_ago(uploaded_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(uploaded_at) = uploaded_at else {
        return "Recently".to_string();
    };
    let hours = (now - uploaded_at).num_hours();
    if hours < 1 {
        "Less than an hour ago".to_string()
    } else if hours < 24 {
        format!("{hours} {} ago", if hours == 1 { "hour" } else { "hours" })
    } else {
        let days = hours / 24;
        format!("{days} {} ago", if days == 1 { "day" } else { "days" })
    }
}

/// The newest candidates for the dashboard card. Failure or an empty store
/// degrades to the illustrative list.
pub async fn recent_candidates(
    store: &dyn RecruitingStore,
    now: DateTime<Utc>,
) -> Sourced<Vec<RecentCandidate>> {
    let result = store.candidates(Some(RECENT_LIMIT)).await.map(|rows| {
        rows.iter()
            .map(|row| RecentCandidate::from_row(row, now))
            .collect()
    });
    or_illustrative(result, "recent candidates", RecentCandidate::illustrative).fill_if(
        "recent candidates",
        Vec::is_empty,
        RecentCandidate::illustrative,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::DataSource;
    use crate::store::memory::{candidate, candidate_with, InMemoryStore};
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap()
    }

    fn sample_store() -> InMemoryStore {
        InMemoryStore::new()
            .with_candidate(candidate_with(
                1,
                "Ana Martínez",
                &["React", "TypeScript"],
                json!([{"title": "Frontend Developer", "years": "2.5"}, {"duration": 1}]),
                Some(92.0),
                Some(now() - Duration::days(3)),
            ))
            .with_candidate(candidate_with(
                2,
                "Luis García",
                &["Rust", "SQL"],
                json!([{"cargo": "Backend Developer", "fecha_inicio": "2020-01-01", "fecha_fin": "2021-01-01"}]),
                Some(76.0),
                Some(now() - Duration::hours(5)),
            ))
            .with_candidate(candidate_with(
                3,
                "carlos sánchez",
                &["Figma"],
                json!("not a list"),
                None,
                Some(now() - Duration::minutes(10)),
            ))
    }

    #[test]
    fn test_summary_from_row() {
        let row = candidate_with(
            1,
            "Ana",
            &["React"],
            json!([{"title": "Frontend Developer", "years": "2.5"}, "bad", {"duration": 1}]),
            Some(88.0),
            None,
        );
        let summary = CandidateSummary::from_row(&row, now());
        assert_eq!(summary.position, "Frontend Developer");
        assert_eq!(summary.experience_years, 3.5);
        assert_eq!(summary.score, 88.0);
        assert_eq!(summary.uploaded_at, now());
    }

    #[test]
    fn test_summary_fallbacks() {
        let summary = CandidateSummary::from_row(&candidate(4), now());
        assert_eq!(summary.name, UNNAMED_CANDIDATE);
        assert_eq!(summary.position, "Not specified");
        assert_eq!(summary.experience_years, 0.0);
        assert!(summary.skills.is_empty());
        assert!(LIST_SCORE_RANGE.contains(&(summary.score as u32)));
    }

    #[test]
    fn test_placeholder_score_is_stable_and_in_range() {
        for id in [0, 1, 2, 17, 4096, i32::MAX, -5] {
            let score = placeholder_score(id, 70..100);
            assert!((70.0..100.0).contains(&score), "id {id} gave {score}");
            assert_eq!(score, placeholder_score(id, 70..100));
        }
    }

    #[test]
    fn test_time_ago_labels() {
        assert_eq!(time_ago(None, now()), "Recently");
        assert_eq!(time_ago(Some(now() - Duration::minutes(59)), now()), "Less than an hour ago");
        assert_eq!(time_ago(Some(now() - Duration::hours(1)), now()), "1 hour ago");
        assert_eq!(time_ago(Some(now() - Duration::hours(23)), now()), "23 hours ago");
        assert_eq!(time_ago(Some(now() - Duration::hours(24)), now()), "1 day ago");
        assert_eq!(time_ago(Some(now() - Duration::days(6)), now()), "6 days ago");
    }

    #[tokio::test]
    async fn test_default_list_is_newest_upload_first() {
        let result = list_candidates(&sample_store(), &CandidateQuery::default(), now()).await;
        assert_eq!(result.source, DataSource::Live);
        let ids: Vec<i32> = result.data.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_search_matches_name_position_and_skills() {
        let by_skill = CandidateQuery {
            search: Some("rust".to_string()),
            ..Default::default()
        };
        let result = list_candidates(&sample_store(), &by_skill, now()).await;
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].id, 2);

        let by_position = CandidateQuery {
            search: Some("FRONTEND".to_string()),
            ..Default::default()
        };
        let result = list_candidates(&sample_store(), &by_position, now()).await;
        assert_eq!(result.data[0].name, "Ana Martínez");
    }

    #[tokio::test]
    async fn test_sort_by_name_ascending_ignores_case() {
        let query = CandidateQuery {
            search: None,
            sort: SortField::Name,
            direction: SortDirection::Asc,
        };
        let result = list_candidates(&sample_store(), &query, now()).await;
        let names: Vec<&str> = result.data.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ana Martínez", "carlos sánchez", "Luis García"]);
    }

    #[tokio::test]
    async fn test_empty_store_is_live_empty() {
        let result = list_candidates(&InMemoryStore::new(), &CandidateQuery::default(), now()).await;
        assert_eq!(result.source, DataSource::Live);
        assert!(result.data.is_empty());
    }

    #[tokio::test]
    async fn test_list_failure_is_tagged() {
        let result =
            list_candidates(&InMemoryStore::failing(), &CandidateQuery::default(), now()).await;
        assert_eq!(result.source, DataSource::FetchFailed);
        assert!(result.data.is_empty());
    }

    #[tokio::test]
    async fn test_detail_normalizes_experience() {
        let detail = candidate_detail(&sample_store(), 2, now()).await.unwrap();
        assert_eq!(detail.summary.position, "Backend Developer");
        assert_eq!(detail.experience.len(), 1);
        assert_eq!(detail.experience[0].years, 1.0);
    }

    #[tokio::test]
    async fn test_detail_unknown_id_is_not_found() {
        let result = candidate_detail(&sample_store(), 99, now()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_recent_candidates_limit_and_labels() {
        let store = sample_store().with_candidate(candidate(0));
        let result = recent_candidates(&store, now()).await;
        assert_eq!(result.source, DataSource::Live);
        assert_eq!(result.data.len(), 3);
        assert_eq!(result.data[0].id, "3");
        assert_eq!(result.data[0].uploaded, "Less than an hour ago");
        assert_eq!(result.data[1].uploaded, "5 hours ago");
        assert_eq!(result.data[2].uploaded, "3 days ago");
        assert!((75.0..95.0).contains(&result.data[0].score));
    }

    #[tokio::test]
    async fn test_recent_candidates_degrade() {
        let empty = recent_candidates(&InMemoryStore::new(), now()).await;
        assert_eq!(empty.source, DataSource::NoData);
        assert_eq!(empty.data.len(), 5);

        let failed = recent_candidates(&InMemoryStore::failing(), now()).await;
        assert_eq!(failed.source, DataSource::FetchFailed);
        assert_eq!(failed.data[0].name, "Ana Martínez");
    }
}
