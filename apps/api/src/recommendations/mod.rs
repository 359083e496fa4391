// Recommendations: stored hiring-process advice, classified by impact and filtered for display.

pub mod handlers;
pub mod impact;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::{or_illustrative, Sourced};
use crate::models::recommendation::RecommendationRow;
use crate::store::RecruitingStore;

pub use impact::{impact_of, ImpactTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Skills,
    Process,
    Tools,
}

impl Category {
    /// Parses a stored `tipo` value. Accepts English and Spanish labels.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "skills" | "habilidades" => Some(Category::Skills),
            "process" | "proceso" | "procesos" => Some(Category::Process),
            "tools" | "herramientas" => Some(Category::Tools),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: ImpactTier,
    pub category: Category,
    /// Never persisted; always starts false.
    pub is_implemented: bool,
}

impl From<RecommendationRow> for RecommendationItem {
    fn from(row: RecommendationRow) -> Self {
        let category = Category::parse(&row.kind).unwrap_or_else(|| {
            debug!(
                "Recommendation {} has unknown category '{}', treating as Process",
                row.id, row.kind
            );
            Category::Process
        });
        RecommendationItem {
            id: row.id.to_string(),
            impact: impact_of(&row.message),
            title: row.message,
            description: row.description.unwrap_or_default(),
            category,
            is_implemented: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImplementationStatus {
    Implemented,
    NotImplemented,
}

impl ImplementationStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "implemented" => Some(ImplementationStatus::Implemented),
            "not_implemented" => Some(ImplementationStatus::NotImplemented),
            _ => None,
        }
    }

    fn matches(self, item: &RecommendationItem) -> bool {
        match self {
            ImplementationStatus::Implemented => item.is_implemented,
            ImplementationStatus::NotImplemented => !item.is_implemented,
        }
    }
}

/// Display filter. Empty sets do not filter; dimensions are ANDed, values within one are ORed.
#[derive(Debug, Clone, Default)]
pub struct RecommendationFilter {
    pub impact: Vec<ImpactTier>,
    pub category: Vec<Category>,
    pub status: Vec<ImplementationStatus>,
}

impl RecommendationFilter {
    pub fn matches(&self, item: &RecommendationItem) -> bool {
        (self.impact.is_empty() || self.impact.contains(&item.impact))
            && (self.category.is_empty() || self.category.contains(&item.category))
            && (self.status.is_empty() || self.status.iter().any(|s| s.matches(item)))
    }
}

/// Loads recommendations newest first and applies `filter`.
/// A failed fetch degrades to an empty list tagged `fetch_failed`.
pub async fn list_recommendations(
    store: &dyn RecruitingStore,
    filter: &RecommendationFilter,
) -> Sourced<Vec<RecommendationItem>> {
    let result = store.recommendations().await.map(|rows| {
        rows.into_iter()
            .map(RecommendationItem::from)
            .filter(|item| filter.matches(item))
            .collect()
    });
    or_illustrative(result, "recommendations", Vec::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::DataSource;
    use crate::store::memory::InMemoryStore;

    fn row(id: i32, message: &str, kind: &str) -> RecommendationRow {
        RecommendationRow {
            id,
            message: message.to_string(),
            description: None,
            kind: kind.to_string(),
            created_at: None,
        }
    }

    fn store() -> InMemoryStore {
        InMemoryStore {
            recommendations: vec![
                row(3, "It is essential to improve technical screening", "Skills"),
                row(2, "Consider a shorter interview loop", "proceso"),
                row(1, "Nice to have: shared calendar", "Tools"),
            ],
            ..InMemoryStore::new()
        }
    }

    #[test]
    fn test_row_conversion() {
        let item = RecommendationItem::from(row(9, "Critical: optimize sourcing", "tools"));
        assert_eq!(item.id, "9");
        assert_eq!(item.impact, ImpactTier::High);
        assert_eq!(item.category, Category::Tools);
        assert_eq!(item.description, "");
        assert!(!item.is_implemented);
    }

    #[test]
    fn test_unknown_category_is_process() {
        let item = RecommendationItem::from(row(1, "x", "Budget"));
        assert_eq!(item.category, Category::Process);
    }

    #[test]
    fn test_status_parse_variants() {
        assert_eq!(
            ImplementationStatus::parse("Not Implemented"),
            Some(ImplementationStatus::NotImplemented)
        );
        assert_eq!(
            ImplementationStatus::parse("implemented"),
            Some(ImplementationStatus::Implemented)
        );
        assert_eq!(ImplementationStatus::parse("done"), None);
    }

    #[tokio::test]
    async fn test_unfiltered_list_keeps_store_order() {
        let result = list_recommendations(&store(), &RecommendationFilter::default()).await;
        assert_eq!(result.source, DataSource::Live);
        let impacts: Vec<_> = result.data.iter().map(|r| r.impact).collect();
        assert_eq!(impacts, vec![ImpactTier::High, ImpactTier::Medium, ImpactTier::Low]);
    }

    #[tokio::test]
    async fn test_filters_combine() {
        let filter = RecommendationFilter {
            impact: vec![ImpactTier::High, ImpactTier::Medium],
            category: vec![Category::Process],
            status: vec![],
        };
        let result = list_recommendations(&store(), &filter).await;
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].id, "2");
    }

    #[tokio::test]
    async fn test_implemented_filter_matches_nothing() {
        let filter = RecommendationFilter {
            status: vec![ImplementationStatus::Implemented],
            ..Default::default()
        };
        assert!(list_recommendations(&store(), &filter).await.data.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty() {
        let result =
            list_recommendations(&InMemoryStore::failing(), &RecommendationFilter::default()).await;
        assert_eq!(result.source, DataSource::FetchFailed);
        assert!(result.data.is_empty());
    }
}
