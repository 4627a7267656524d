use std::sync::Arc;
use thiserror::Error;
use crate::core::{Matcher, RECOMMENDATION_LIMIT};
use crate::models::{CandidateFilter, MatchResult, MatchingCriteria, RequesterProfile, SearchFilters};
use crate::services::directory::{DirectoryError, MentorDirectory};

/// Errors surfaced by the matching service
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// Matching service
///
/// Resolves the requester and candidate pool through the directory and
/// hands them to the matcher.
#[derive(Clone)]
pub struct MatchingService {
    directory: Arc<dyn MentorDirectory>,
    matcher: Matcher,
    recommendation_limit: usize,
}

impl MatchingService {
    pub fn new(directory: Arc<dyn MentorDirectory>, matcher: Matcher) -> Self {
        Self {
            directory,
            matcher,
            recommendation_limit: RECOMMENDATION_LIMIT,
        }
    }

    /// Override the number of profile-derived recommendations returned
    pub fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }

    pub fn directory(&self) -> &Arc<dyn MentorDirectory> {
        &self.directory
    }

    /// Rank mentors for a user, optionally against explicit criteria
    pub async fn find_matches(
        &self,
        user_id: &str,
        criteria: Option<&MatchingCriteria>,
        limit: usize,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let requester = self.resolve(user_id).await?;

        let filter = criteria.map(MatchingCriteria::candidate_filter).unwrap_or_default();
        let candidates = self.directory.list_candidates(filter).await?;

        tracing::debug!("Ranking {} candidates for {}", candidates.len(), user_id);

        Ok(self.matcher.find_matches(&requester, &candidates, criteria, limit))
    }

    /// Profile-derived recommendations
    pub async fn recommendations(&self, user_id: &str) -> Result<Vec<MatchResult>, MatchError> {
        let requester = self.resolve(user_id).await?;
        let candidates = self.directory.list_candidates(CandidateFilter::default()).await?;

        tracing::debug!(
            "Recommending up to {} of {} candidates for {}",
            self.recommendation_limit,
            candidates.len(),
            user_id
        );

        Ok(self
            .matcher
            .find_matches(&requester, &candidates, None, self.recommendation_limit))
    }

    /// Unscored mentor search
    pub async fn search(
        &self,
        query: &str,
        filters: Option<&SearchFilters>,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let candidates = self
            .directory
            .search_candidates(query, filters.copied().unwrap_or_default())
            .await?;

        Ok(self.matcher.search(query, &candidates, filters))
    }

    async fn resolve(&self, user_id: &str) -> Result<RequesterProfile, MatchError> {
        self.directory
            .resolve_profile(user_id)
            .await?
            .ok_or_else(|| MatchError::NotFound(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, MentorCandidate, PublicUser};
    use crate::services::MemoryDirectory;

    fn create_directory(pool_size: usize) -> MemoryDirectory {
        let requester = RequesterProfile {
            user_id: "mentee".to_string(),
            skills: vec!["writing".to_string()],
            ..Default::default()
        };

        let candidates = (0..pool_size)
            .map(|i| MentorCandidate {
                id: i.to_string(),
                user_id: format!("owner_{}", i),
                bio: None,
                availability: Availability::Available,
                years_experience: Some(i as u32),
                max_mentees: 2,
                current_mentees_count: 0,
                accepts_remote: false,
                skills: vec!["Grant Writing".to_string()],
                user: PublicUser {
                    id: format!("owner_{}", i),
                    name: format!("Mentor {}", i),
                    ..Default::default()
                },
            })
            .collect();

        MemoryDirectory::with_data(vec![requester], candidates)
    }

    #[tokio::test]
    async fn test_unknown_requester_is_not_found() {
        let service = MatchingService::new(Arc::new(MemoryDirectory::new()), Matcher::default());

        let err = service.find_matches("ghost", None, 10).await.unwrap_err();
        assert!(matches!(err, MatchError::NotFound(id) if id == "ghost"));

        let err = service.recommendations("ghost").await.unwrap_err();
        assert!(matches!(err, MatchError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_search_does_not_need_requester() {
        let service = MatchingService::new(Arc::new(MemoryDirectory::new()), Matcher::default());

        let result = service.search("anything", None).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_recommendations_use_default_limit() {
        let service = MatchingService::new(Arc::new(create_directory(12)), Matcher::default());

        let result = service.recommendations("mentee").await.unwrap();
        assert_eq!(result.len(), RECOMMENDATION_LIMIT);
    }

    #[tokio::test]
    async fn test_recommendations_honor_configured_limit() {
        let service = MatchingService::new(Arc::new(create_directory(12)), Matcher::default())
            .with_recommendation_limit(8);

        let result = service.recommendations("mentee").await.unwrap();
        assert_eq!(result.len(), 8);
        // Highest experience bonus first
        assert_eq!(result[0].mentor_id, "10");
    }
}
