use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::experience::total_years;

/// Fixed experience ranges used by the dashboard histogram. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceBucket {
    #[serde(rename = "0-1")]
    UpToOne,
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5-8")]
    FiveToEight,
    #[serde(rename = "8+")]
    OverEight,
}

impl ExperienceBucket {
    pub const ALL: [ExperienceBucket; 5] = [
        ExperienceBucket::UpToOne,
        ExperienceBucket::OneToThree,
        ExperienceBucket::ThreeToFive,
        ExperienceBucket::FiveToEight,
        ExperienceBucket::OverEight,
    ];

    pub fn for_years(years: f64) -> Self {
        match years {
            y if y <= 1.0 => ExperienceBucket::UpToOne,
            y if y <= 3.0 => ExperienceBucket::OneToThree,
            y if y <= 5.0 => ExperienceBucket::ThreeToFive,
            y if y <= 8.0 => ExperienceBucket::FiveToEight,
            _ => ExperienceBucket::OverEight,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCount {
    pub range: ExperienceBucket,
    pub count: u32,
}

/// Buckets candidates by total years of experience.
///
/// Takes one experience list per candidate. Every candidate lands in exactly one
/// bucket; a missing list totals 0 years. All five buckets are always returned.
pub fn experience_histogram<'a, I>(experience_lists: I) -> Vec<BucketCount>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    let mut counts = [0u32; 5];
    for experience in experience_lists {
        let bucket = ExperienceBucket::for_years(total_years(experience));
        counts[bucket.index()] += 1;
    }

    ExperienceBucket::ALL
        .iter()
        .map(|&range| BucketCount {
            range,
            count: counts[range.index()],
        })
        .collect()
}
