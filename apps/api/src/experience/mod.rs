// Experience normalization: typed parsing of the free-form experience JSON stored per candidate.

pub mod normalizer;

pub use normalizer::{primary_title, title_of, total_years, years_of};
