use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How many candidates list a given skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFrequency {
    pub name: String,
    pub count: u32,
}

impl SkillFrequency {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Counts skill memberships across candidates and keeps the `top_n` most frequent.
///
/// Skill strings are compared exactly as stored. Ties keep first-seen order.
pub fn rank_skills<I, L, S>(skill_lists: I, top_n: usize) -> Vec<SkillFrequency>
where
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut ranked: Vec<SkillFrequency> = Vec::new();

    for list in skill_lists {
        for skill in list {
            let skill = skill.as_ref();
            match index.get(skill).copied() {
                Some(i) => ranked[i].count += 1,
                None => {
                    index.insert(skill.to_string(), ranked.len());
                    ranked.push(SkillFrequency::new(skill, 1));
                }
            }
        }
    }

    // Stable sort: equal counts stay in first-seen order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}
