// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, CandidateFilter, MatchResult, MatchingCriteria, MentorCandidate, MentorProfile,
    PublicUser, RequesterProfile, ScoringWeights, SearchFilters,
};
pub use requests::{FindMatchesRequest, RecommendationsQuery, SearchQuery};
pub use responses::{ErrorResponse, HealthResponse, MatchesResponse};
