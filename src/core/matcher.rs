use crate::models::{
    MatchResult, MatchingCriteria, MentorCandidate, RequesterProfile, ScoringWeights, SearchFilters,
    CandidateFilter,
};
use crate::core::{
    filters::{is_eligible, matches_search_query},
    scoring::{calculate_match_score, MatchTerms},
    text::normalize,
};

/// Default number of matches returned by `find_matches`
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Number of matches returned by `recommendations`
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Mentor ranking engine - implements the filter, score and rank pipeline
///
/// # Pipeline Stages
/// 1. Term resolution (criteria overrides, case folding)
/// 2. Eligibility filtering
/// 3. Scoring
/// 4. Stable descending sort and truncation
///
/// The matcher holds only its weights and performs no I/O, so it can be
/// shared freely between concurrent callers.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank mentor candidates for a requester
    ///
    /// # Arguments
    /// * `requester` - The resolved requester profile
    /// * `candidates` - Candidate pool, possibly pre-filtered by the directory
    /// * `criteria` - Optional overrides and extra constraints
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// Matches ordered by descending score. Equal scores keep pool order.
    pub fn find_matches(
        &self,
        requester: &RequesterProfile,
        candidates: &[MentorCandidate],
        criteria: Option<&MatchingCriteria>,
        limit: usize,
    ) -> Vec<MatchResult> {
        let terms = MatchTerms::resolve(requester, criteria);
        let min_experience = criteria.and_then(|c| c.min_experience);
        let prefilter = criteria.map(MatchingCriteria::candidate_filter).unwrap_or_default();

        let mut matches: Vec<MatchResult> = candidates
            .iter()
            .filter(|candidate| is_eligible(candidate, &requester.user_id, min_experience))
            .filter(|candidate| prefilter.accepts(candidate))
            .map(|candidate| {
                let breakdown = calculate_match_score(candidate, &terms, &self.weights);

                MatchResult {
                    mentor_id: candidate.id.clone(),
                    score: breakdown.score,
                    matched_skills: breakdown.matched_skills,
                    matched_interests: breakdown.matched_interests,
                    location_match: breakdown.location_match,
                    availability: candidate.availability,
                    years_experience: candidate.years_experience,
                    profile: candidate.profile(),
                }
            })
            .collect();

        // sort_by is stable, so ties keep pool order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(limit);

        matches
    }

    /// Profile-derived matches with the fixed recommendation limit
    pub fn recommendations(
        &self,
        requester: &RequesterProfile,
        candidates: &[MentorCandidate],
    ) -> Vec<MatchResult> {
        self.find_matches(requester, candidates, None, RECOMMENDATION_LIMIT)
    }

    /// Unscored listing of candidates whose bio, owner name or skills contain `query`
    ///
    /// Eligibility rules do not apply here; only the explicit filters narrow
    /// the listing.
    pub fn search(
        &self,
        query: &str,
        candidates: &[MentorCandidate],
        filters: Option<&SearchFilters>,
    ) -> Vec<MatchResult> {
        let query_folded = normalize(query);
        let filter: CandidateFilter = filters.copied().map(Into::into).unwrap_or_default();

        candidates
            .iter()
            .filter(|candidate| matches_search_query(candidate, &query_folded))
            .filter(|candidate| filter.accepts(candidate))
            .map(MatchResult::unscored)
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
