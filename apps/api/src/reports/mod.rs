// Reports: stored analysis summaries plus live skill and experience distributions.

pub mod handlers;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::analytics::fallback::{self, DESCRIPTIVE_RESULTS};
use crate::analytics::{experience_histogram, or_illustrative, rank_skills, BucketCount, SkillFrequency, Sourced};
use crate::models::report::DescriptiveResultRow;
use crate::store::RecruitingStore;

const DESCRIPTIVE_RESULTS_LIMIT: i64 = 10;
const TOP_SKILLS: usize = 6;

#[derive(Debug, Clone, Serialize)]
pub struct DescriptiveResult {
    pub id: i32,
    pub cvs_processed: i32,
    pub top_skills: Vec<String>,
    /// Stored as free-form JSON (a number or a label); passed through untouched.
    pub average_experience: Option<Value>,
    pub analysed_at: Option<DateTime<Utc>>,
}

impl From<DescriptiveResultRow> for DescriptiveResult {
    fn from(row: DescriptiveResultRow) -> Self {
        DescriptiveResult {
            id: row.id,
            cvs_processed: row.cvs_processed.unwrap_or(0),
            top_skills: row.top_skills.unwrap_or_default(),
            average_experience: row.average_experience,
            analysed_at: row.analysed_at,
        }
    }
}

fn illustrative_results() -> Vec<DescriptiveResult> {
    DESCRIPTIVE_RESULTS
        .iter()
        .map(|(id, cvs, skills, avg, date)| DescriptiveResult {
            id: *id,
            cvs_processed: *cvs,
            top_skills: skills.iter().map(|s| s.to_string()).collect(),
            average_experience: Some(Value::String(avg.to_string())),
            analysed_at: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportsData {
    pub descriptive_results: Sourced<Vec<DescriptiveResult>>,
    pub top_skills: Sourced<Vec<SkillFrequency>>,
    pub experience_distribution: Sourced<Vec<BucketCount>>,
}

/// Builds the reports page. Each section degrades to illustrative values on its own.
pub async fn reports_data(store: &dyn RecruitingStore) -> ReportsData {
    let (results, skills, experience) = tokio::join!(
        store.descriptive_results(DESCRIPTIVE_RESULTS_LIMIT),
        store.skill_lists(),
        store.experience_records(),
    );

    let descriptive_results = or_illustrative(
        results.map(|rows| rows.into_iter().map(DescriptiveResult::from).collect()),
        "descriptive results",
        illustrative_results,
    );

    let top_skills = or_illustrative(
        skills.map(|lists| rank_skills(&lists, TOP_SKILLS)),
        "report skills",
        fallback::report_skills,
    );

    let experience_distribution = or_illustrative(
        experience.map(|records| experience_histogram(records.iter().map(Option::as_ref))),
        "experience distribution",
        fallback::report_experience,
    );

    ReportsData {
        descriptive_results,
        top_skills,
        experience_distribution,
    }
}
