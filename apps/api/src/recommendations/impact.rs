use serde::{Deserialize, Serialize};

/// Coarse importance of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactTier {
    High,
    Medium,
    Low,
}

impl ImpactTier {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Some(ImpactTier::High),
            "medium" => Some(ImpactTier::Medium),
            "low" => Some(ImpactTier::Low),
            _ => None,
        }
    }
}

const HIGH_IMPACT_KEYWORDS: &[&str] = &[
    "crucial",
    "critical",
    "important",
    "essential",
    "improve",
    "optimize",
];

const MEDIUM_IMPACT_KEYWORDS: &[&str] = &["consider", "evaluate", "analyze", "possible", "may"];

/// Classifies a recommendation message by case-insensitive keyword substring match.
///
/// High keywords are checked first, then medium; no match is `Low`.
/// Keyword lists are English only.
pub fn impact_of(message: &str) -> ImpactTier {
    let message_lower = message.to_lowercase();

    if HIGH_IMPACT_KEYWORDS
        .iter()
        .any(|kw| message_lower.contains(*kw))
    {
        ImpactTier::High
    } else if MEDIUM_IMPACT_KEYWORDS
        .iter()
        .any(|kw| message_lower.contains(*kw))
    {
        ImpactTier::Medium
    } else {
        ImpactTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_impact() {
        assert_eq!(impact_of("This is crucial to improve retention"), ImpactTier::High);
    }

    #[test]
    fn test_medium_impact() {
        assert_eq!(impact_of("Consider evaluating the process"), ImpactTier::Medium);
    }

    #[test]
    fn test_low_impact() {
        assert_eq!(impact_of("Nice to have"), ImpactTier::Low);
        assert_eq!(impact_of(""), ImpactTier::Low);
    }

    #[test]
    fn test_high_wins_over_medium() {
        assert_eq!(
            impact_of("You may want to OPTIMIZE the screening funnel"),
            ImpactTier::High
        );
    }

    #[test]
    fn test_match_is_substring_and_case_insensitive() {
        assert_eq!(impact_of("CRITICALLY short on data engineers"), ImpactTier::High);
        assert_eq!(impact_of("Re-Analyze onboarding"), ImpactTier::Medium);
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!(ImpactTier::parse(" high "), Some(ImpactTier::High));
        assert_eq!(ImpactTier::parse("MEDIUM"), Some(ImpactTier::Medium));
        assert_eq!(ImpactTier::parse("urgent"), None);
    }
}
