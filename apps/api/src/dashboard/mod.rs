//! Dashboard: headline metrics, the recent-candidate card and the two skill charts.
//!
//! Each part is fetched independently and degrades on its own, so one failing
//! query never blanks the whole page.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analytics::fallback::{self, METRICS};
use crate::analytics::{
    count_qualified, or_illustrative, qualification_split, qualified_fraction, rank_skills,
    DataSource, SkillFrequency, SkillQualification, Sourced,
};
use crate::candidates::{recent_candidates, RecentCandidate};
use crate::store::{FetchError, RecruitingStore};

/// Simulated average résumé processing time in minutes. Processing time is not tracked yet.
const SIMULATED_PROCESSING_MINUTES: f64 = 2.5;
const BAR_CHART_SKILLS: usize = 5;
const PIE_CHART_SKILLS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_candidates: i64,
    pub processed_resumes: i64,
    pub qualified_candidates: i64,
    pub avg_processing_minutes: f64,
}

impl DashboardMetrics {
    fn illustrative() -> Self {
        DashboardMetrics {
            total_candidates: METRICS.total_candidates,
            processed_resumes: METRICS.processed_resumes,
            qualified_candidates: METRICS.qualified_candidates,
            avg_processing_minutes: METRICS.avg_processing_minutes,
        }
    }

    fn is_empty(&self) -> bool {
        self.total_candidates == 0 && self.processed_resumes == 0 && self.qualified_candidates == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    /// Qualified vs. unqualified per top skill. Approximation: one global qualified
    /// rate is spread across every skill (see `analytics::qualification`).
    pub skill_qualification: Sourced<Vec<SkillQualification>>,
    pub skill_distribution: Sourced<Vec<SkillFrequency>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub metrics: Sourced<DashboardMetrics>,
    pub recent_candidates: Sourced<Vec<RecentCandidate>>,
    pub charts: ChartData,
}

async fn fetch_metrics(
    store: &dyn RecruitingStore,
    threshold: f64,
) -> Result<DashboardMetrics, FetchError> {
    let (total_candidates, processed_resumes, probabilities) = tokio::try_join!(
        store.count_candidates(),
        store.count_resumes(),
        store.success_probabilities(),
    )?;
    Ok(DashboardMetrics {
        total_candidates,
        processed_resumes,
        qualified_candidates: count_qualified(&probabilities, threshold) as i64,
        avg_processing_minutes: SIMULATED_PROCESSING_MINUTES,
    })
}

pub async fn dashboard_metrics(
    store: &dyn RecruitingStore,
    threshold: f64,
) -> Sourced<DashboardMetrics> {
    or_illustrative(
        fetch_metrics(store, threshold).await,
        "dashboard metrics",
        DashboardMetrics::illustrative,
    )
    .fill_if(
        "dashboard metrics",
        DashboardMetrics::is_empty,
        DashboardMetrics::illustrative,
    )
}

pub async fn chart_data(store: &dyn RecruitingStore, threshold: f64) -> ChartData {
    let (skills, probabilities) =
        tokio::join!(store.skill_lists(), store.success_probabilities());

    let skill_qualification = match (&skills, &probabilities) {
        (Ok(lists), Ok(probabilities)) => {
            let top = rank_skills(lists, BAR_CHART_SKILLS);
            match qualified_fraction(probabilities, threshold) {
                Some(fraction) => Sourced::live(qualification_split(&top, fraction)),
                // No predictions yet: there is no rate to spread.
                None => Sourced::live(Vec::new()),
            }
        }
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("Error getting skill qualification data: {e}");
            Sourced {
                source: DataSource::FetchFailed,
                data: fallback::skill_qualification(),
            }
        }
    }
    .fill_if(
        "skill qualification data",
        Vec::is_empty,
        fallback::skill_qualification,
    );

    let skill_distribution = or_illustrative(
        skills.map(|lists| rank_skills(&lists, PIE_CHART_SKILLS)),
        "skill distribution",
        fallback::skill_distribution,
    )
    .fill_if(
        "skill distribution",
        Vec::is_empty,
        fallback::skill_distribution,
    );

    ChartData {
        skill_qualification,
        skill_distribution,
    }
}

/// Everything the dashboard page shows, fetched concurrently.
pub async fn dashboard_overview(
    store: &dyn RecruitingStore,
    threshold: f64,
    now: DateTime<Utc>,
) -> DashboardOverview {
    let (metrics, recent_candidates, charts) = tokio::join!(
        dashboard_metrics(store, threshold),
        recent_candidates(store, now),
        chart_data(store, threshold),
    );
    DashboardOverview {
        metrics,
        recent_candidates,
        charts,
    }
}
