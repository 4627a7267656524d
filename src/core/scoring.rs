use crate::models::{Availability, MatchingCriteria, MentorCandidate, RequesterProfile, ScoringWeights};
use crate::core::text::{locations_match, matched_terms, normalize, normalize_all};

/// Requester-side terms after criteria overrides and case folding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTerms {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub location: Option<String>,
}

impl MatchTerms {
    /// Resolve the terms to match with
    ///
    /// Criteria skills and interests replace the requester's when present,
    /// even if empty. A criteria location only replaces the requester's when
    /// non-empty.
    pub fn resolve(requester: &RequesterProfile, criteria: Option<&MatchingCriteria>) -> Self {
        let skills = criteria
            .and_then(|c| c.skills.as_deref())
            .unwrap_or(requester.skills.as_slice());
        let interests = criteria
            .and_then(|c| c.interests.as_deref())
            .unwrap_or(requester.interests.as_slice());
        let location = criteria
            .and_then(|c| c.location.as_deref())
            .filter(|l| !l.is_empty())
            .or(requester.location.as_deref());

        Self {
            skills: normalize_all(skills),
            interests: normalize_all(interests),
            location: location.map(normalize),
        }
    }
}

/// Sub-scores for a single candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub matched_interests: Vec<String>,
    pub location_match: bool,
}

/// Calculate the additive match score for a candidate
///
/// Scoring formula (default weights):
/// score = matched_skills * 10
///       + matched_interests * 5       # interests are matched against skill tags
///       + 8 if location matches
///       + min(years_experience * 3, 30)
///       + 15 if available
///       + 5 if remote is accepted
pub fn calculate_match_score(
    candidate: &MentorCandidate,
    terms: &MatchTerms,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let tags = normalize_all(&candidate.skills);
    let candidate_location = candidate.user.location.as_deref().map(normalize);

    let matched_skills = matched_terms(&terms.skills, &tags);
    let matched_interests = matched_terms(&terms.interests, &tags);
    let location_match = locations_match(terms.location.as_deref(), candidate_location.as_deref());

    let mut score = 0u32;
    score = score.saturating_add(count(&matched_skills).saturating_mul(weights.skill));
    score = score.saturating_add(count(&matched_interests).saturating_mul(weights.interest));

    if location_match {
        score = score.saturating_add(weights.location);
    }

    score = score.saturating_add(experience_bonus(candidate.years_experience, weights));

    if candidate.availability == Availability::Available {
        score = score.saturating_add(weights.availability);
    }

    if candidate.accepts_remote {
        score = score.saturating_add(weights.remote);
    }

    ScoreBreakdown {
        score,
        matched_skills,
        matched_interests,
        location_match,
    }
}

/// Experience bonus, capped; unknown experience contributes nothing
#[inline]
fn experience_bonus(years: Option<u32>, weights: &ScoringWeights) -> u32 {
    years
        .map(|y| y.saturating_mul(weights.experience_per_year).min(weights.experience_cap))
        .unwrap_or(0)
}

#[inline]
fn count(terms: &[String]) -> u32 {
    u32::try_from(terms.len()).unwrap_or(u32::MAX)
}
