// Aggregations over candidate collections: skill ranking, experience histogram,
// qualification split, and the illustrative-fallback policy shared by every read path.

pub mod fallback;
pub mod histogram;
pub mod qualification;
pub mod skills;

pub use fallback::{or_illustrative, DataSource, Sourced};
pub use histogram::{experience_histogram, BucketCount};
pub use qualification::{count_qualified, qualification_split, qualified_fraction, SkillQualification};
pub use skills::{rank_skills, SkillFrequency};
