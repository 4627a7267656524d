// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod text;

pub use filters::{is_eligible, matches_search_query};
pub use matcher::{Matcher, DEFAULT_MATCH_LIMIT, RECOMMENDATION_LIMIT};
pub use scoring::{calculate_match_score, MatchTerms, ScoreBreakdown};
