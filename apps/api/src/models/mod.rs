pub mod candidate;
pub mod recommendation;
pub mod report;
pub mod resume;
