//! Degrade-to-illustrative policy for dashboard read paths.
//!
//! Data access returns `Result<T, FetchError>`; the caller decides to substitute
//! fixed illustrative values so the dashboard always renders. Responses carry a
//! `source` tag so a consumer can tell live data, a genuinely empty store, and a
//! failed fetch apart. A real outage still renders as data: known limitation.

use serde::Serialize;
use tracing::{error, info};

use crate::analytics::histogram::{BucketCount, ExperienceBucket};
use crate::analytics::qualification::SkillQualification;
use crate::analytics::skills::SkillFrequency;
use crate::store::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Live,
    /// The store answered with nothing usable; illustrative values were substituted.
    NoData,
    /// The store could not be reached; illustrative values were substituted.
    FetchFailed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sourced<T> {
    pub source: DataSource,
    pub data: T,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self {
            source: DataSource::Live,
            data,
        }
    }

    /// Replaces live-but-empty data with `fallback`, tagging it `NoData`.
    pub fn fill_if(
        self,
        what: &str,
        is_empty: impl FnOnce(&T) -> bool,
        fallback: impl FnOnce() -> T,
    ) -> Self {
        if self.source == DataSource::Live && is_empty(&self.data) {
            info!("No {what} in store, serving illustrative data");
            Self {
                source: DataSource::NoData,
                data: fallback(),
            }
        } else {
            self
        }
    }
}

/// Unwraps a fetch result, substituting `fallback` (and logging) on failure.
pub fn or_illustrative<T>(
    result: Result<T, FetchError>,
    what: &str,
    fallback: impl FnOnce() -> T,
) -> Sourced<T> {
    match result {
        Ok(data) => Sourced::live(data),
        Err(e) => {
            error!("Error getting {what}: {e}");
            Sourced {
                source: DataSource::FetchFailed,
                data: fallback(),
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Illustrative datasets
// ────────────────────────────────────────────────────────────────────────────

pub struct IllustrativeMetrics {
    pub total_candidates: i64,
    pub processed_resumes: i64,
    pub qualified_candidates: i64,
    pub avg_processing_minutes: f64,
}

pub const METRICS: IllustrativeMetrics = IllustrativeMetrics {
    total_candidates: 128,
    processed_resumes: 87,
    qualified_candidates: 42,
    avg_processing_minutes: 1.8,
};

/// (name, position, score, date label)
pub const RECENT_CANDIDATES: &[(&str, &str, u32, &str)] = &[
    ("Ana Martínez", "Frontend Developer", 92, "18/05/2025"),
    ("Carlos Sánchez", "UI/UX Designer", 87, "17/05/2025"),
    ("Luis García", "Backend Developer", 76, "16/05/2025"),
    ("Sofía Rodríguez", "Full Stack Developer", 65, "15/05/2025"),
    ("Javier López", "DevOps Engineer", 82, "14/05/2025"),
];

pub fn skill_qualification() -> Vec<SkillQualification> {
    [
        ("Technical", 65, 35),
        ("Communication", 78, 22),
        ("Leadership", 45, 55),
        ("Problem Solving", 70, 30),
        ("Team Work", 82, 18),
    ]
    .into_iter()
    .map(|(name, qualified, unqualified)| SkillQualification {
        name: name.to_string(),
        qualified,
        unqualified,
    })
    .collect()
}

pub fn skill_distribution() -> Vec<SkillFrequency> {
    [
        ("Frontend", 35),
        ("Backend", 25),
        ("Full Stack", 20),
        ("DevOps", 10),
        ("Design", 10),
    ]
    .into_iter()
    .map(|(name, count)| SkillFrequency::new(name, count))
    .collect()
}

pub fn report_skills() -> Vec<SkillFrequency> {
    [
        ("JavaScript", 120),
        ("React", 98),
        ("Node.js", 86),
        ("TypeScript", 75),
        ("Python", 65),
        ("SQL", 60),
    ]
    .into_iter()
    .map(|(name, count)| SkillFrequency::new(name, count))
    .collect()
}

pub fn report_experience() -> Vec<BucketCount> {
    ExperienceBucket::ALL
        .into_iter()
        .zip([45, 80, 65, 40, 25])
        .map(|(range, count)| BucketCount { range, count })
        .collect()
}

/// (id, cvs processed, top skills, average experience label, analysis date)
pub const DESCRIPTIVE_RESULTS: &[(i32, i32, &[&str], &str, &str)] = &[
    (1, 255, &["JavaScript", "React", "SQL", "AWS", "Python"], "4.2 years", "2023-05-20"),
    (2, 320, &["Python", "SQL", "React", "TypeScript", "Docker"], "3.8 years", "2023-06-15"),
    (3, 422, &["React", "Node.js", "TypeScript", "GraphQL", "AWS"], "4.5 years", "2023-07-10"),
];
