use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mentor availability state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Availability::Available),
            "busy" => Ok(Availability::Busy),
            "unavailable" => Ok(Availability::Unavailable),
            other => Err(format!("unknown availability: {}", other)),
        }
    }
}

/// Snapshot of the user a mentor search is performed for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequesterProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Explicit matching criteria
///
/// `skills`, `interests` and `location` override the requester's own values
/// when present. The remaining fields have no profile counterpart and are
/// only enforced when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingCriteria {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
    /// Any JSON number; zero or negative values impose no constraint
    #[serde(rename = "minExperience", default)]
    pub min_experience: Option<f64>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(rename = "acceptsRemote", default)]
    pub accepts_remote: Option<bool>,
}

impl MatchingCriteria {
    /// Server-side pre-filter derived from these criteria
    pub fn candidate_filter(&self) -> CandidateFilter {
        CandidateFilter {
            availability: self.availability,
            accepts_remote: self.accepts_remote,
        }
    }
}

/// Public profile fields of the user owning a mentor profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Mentor profile as loaded from the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorCandidate {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub availability: Availability,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: Option<u32>,
    #[serde(rename = "maxMentees")]
    pub max_mentees: u32,
    #[serde(rename = "currentMenteesCount", default)]
    pub current_mentees_count: u32,
    #[serde(rename = "acceptsRemote", default)]
    pub accepts_remote: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    pub user: PublicUser,
}

impl MentorCandidate {
    /// Whether the mentor has no free mentee slot left
    pub fn at_capacity(&self) -> bool {
        self.current_mentees_count >= self.max_mentees
    }

    pub fn profile(&self) -> MentorProfile {
        MentorProfile {
            id: self.id.clone(),
            bio: self.bio.clone(),
            availability: self.availability,
            years_experience: self.years_experience,
            skills: self.skills.clone(),
            user: self.user.clone(),
        }
    }
}

/// Display payload attached to each match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    pub id: String,
    pub bio: Option<String>,
    pub availability: Availability,
    #[serde(rename = "yearsExperience")]
    pub years_experience: Option<u32>,
    pub skills: Vec<String>,
    pub user: PublicUser,
}

/// Ranked mentor match with the sub-scores that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "mentorId")]
    pub mentor_id: String,
    pub score: u32,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "matchedInterests")]
    pub matched_interests: Vec<String>,
    #[serde(rename = "locationMatch")]
    pub location_match: bool,
    pub availability: Availability,
    #[serde(rename = "yearsExperience")]
    pub years_experience: Option<u32>,
    pub profile: MentorProfile,
}

impl MatchResult {
    /// Unscored entry, as returned by search
    pub fn unscored(candidate: &MentorCandidate) -> Self {
        Self {
            mentor_id: candidate.id.clone(),
            score: 0,
            matched_skills: vec![],
            matched_interests: vec![],
            location_match: false,
            availability: candidate.availability,
            years_experience: candidate.years_experience,
            profile: candidate.profile(),
        }
    }
}

/// Server-side candidate pre-filter
///
/// Only narrows what the directory loads; the engine re-checks eligibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CandidateFilter {
    pub availability: Option<Availability>,
    pub accepts_remote: Option<bool>,
}

impl CandidateFilter {
    #[inline]
    pub fn accepts(&self, candidate: &MentorCandidate) -> bool {
        if let Some(availability) = self.availability {
            if candidate.availability != availability {
                return false;
            }
        }

        if let Some(accepts_remote) = self.accepts_remote {
            if candidate.accepts_remote != accepts_remote {
                return false;
            }
        }

        true
    }
}

/// Exact-match narrowing for mentor search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(rename = "acceptsRemote", default)]
    pub accepts_remote: Option<bool>,
}

impl From<SearchFilters> for CandidateFilter {
    fn from(filters: SearchFilters) -> Self {
        Self {
            availability: filters.availability,
            accepts_remote: filters.accepts_remote,
        }
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub skill: u32,
    pub interest: u32,
    pub location: u32,
    pub experience_per_year: u32,
    pub experience_cap: u32,
    pub availability: u32,
    pub remote: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 10,
            interest: 5,
            location: 8,
            experience_per_year: 3,
            experience_cap: 30,
            availability: 15,
            remote: 5,
        }
    }
}
