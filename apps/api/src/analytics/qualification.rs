use serde::{Deserialize, Serialize};

use crate::analytics::skills::SkillFrequency;

/// Bar value for the "qualified vs. unqualified by skill" chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillQualification {
    pub name: String,
    pub qualified: u32,
    pub unqualified: u32,
}

/// Share of predictions whose success probability meets `threshold`.
/// `None` when there are no predictions to measure.
pub fn qualified_fraction(probabilities: &[f64], threshold: f64) -> Option<f64> {
    if probabilities.is_empty() {
        return None;
    }
    let qualified = count_qualified(probabilities, threshold);
    Some(qualified as f64 / probabilities.len() as f64)
}

pub fn count_qualified(probabilities: &[f64], threshold: f64) -> usize {
    probabilities.iter().filter(|&&p| p >= threshold).count()
}

/// Splits each skill's candidate count into qualified and unqualified parts.
///
/// APPROXIMATION: the global `fraction` is applied uniformly to every skill. The
/// result is not a per-skill qualification rate, since predictions are never joined
/// to skills here. It only shapes the chart.
pub fn qualification_split(skills: &[SkillFrequency], fraction: f64) -> Vec<SkillQualification> {
    let fraction = fraction.clamp(0.0, 1.0);
    skills
        .iter()
        .map(|skill| {
            let qualified = (skill.count as f64 * fraction).round() as u32;
            SkillQualification {
                name: skill.name.clone(),
                qualified,
                unqualified: skill.count - qualified,
            }
        })
        .collect()
}
