use crate::models::{Availability, MentorCandidate};
use crate::core::text::contains_folded;

/// Check the hard eligibility rules for a candidate
///
/// Rules are applied in order and short-circuit on the first failure:
/// self-match, unavailable, at capacity, below minimum experience.
#[inline]
pub fn is_eligible(
    candidate: &MentorCandidate,
    requester_id: &str,
    min_experience: Option<f64>,
) -> bool {
    if candidate.user_id == requester_id {
        return false;
    }

    if candidate.availability == Availability::Unavailable {
        return false;
    }

    if candidate.at_capacity() {
        return false;
    }

    // Zero, negative or non-finite minimums impose nothing
    if let Some(min) = min_experience.filter(|m| m.is_finite() && *m > 0.0) {
        match candidate.years_experience {
            Some(years) if f64::from(years) >= min => {}
            _ => return false,
        }
    }

    true
}

/// Check whether a candidate's bio, owner name or any skill tag contains the query
///
/// `query_folded` must already be lower-cased.
#[inline]
pub fn matches_search_query(candidate: &MentorCandidate, query_folded: &str) -> bool {
    if candidate
        .bio
        .as_deref()
        .is_some_and(|bio| contains_folded(bio, query_folded))
    {
        return true;
    }

    if contains_folded(&candidate.user.name, query_folded) {
        return true;
    }

    candidate
        .skills
        .iter()
        .any(|skill| contains_folded(skill, query_folded))
}
