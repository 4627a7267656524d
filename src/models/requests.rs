use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Availability, MatchingCriteria};

/// Request to rank mentors against explicit criteria
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub criteria: Option<MatchingCriteria>,
    /// Any JSON number; out-of-range values are clamped, never rejected
    #[serde(default)]
    pub limit: Option<f64>,
}

/// Query for profile-derived recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}

/// Query for the unscored mentor search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "query")]
    pub q: String,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(rename = "acceptsRemote", default)]
    pub accepts_remote: Option<bool>,
}
