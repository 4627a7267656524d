//! PEAL Match - mentor matching service for the PEAL mentorship platform
//!
//! This library provides the mentor ranking engine and the directory and
//! HTTP layers that host it. The engine filters ineligible mentors, scores
//! the rest with an additive weighted heuristic and returns a ranked list
//! with the sub-scores that explain each rank.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchTerms, DEFAULT_MATCH_LIMIT, RECOMMENDATION_LIMIT};
pub use models::{
    Availability, MatchResult, MatchingCriteria, MentorCandidate, RequesterProfile, ScoringWeights, SearchFilters,
};
pub use services::{MatchError, MatchingService, MentorDirectory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::default();
        assert_eq!(matcher.weights(), &ScoringWeights::default());
        assert!(matcher
            .find_matches(&RequesterProfile::default(), &[], None, DEFAULT_MATCH_LIMIT)
            .is_empty());
    }
}
