use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use crate::core::{matches_search_query, text::normalize};
use crate::models::{CandidateFilter, MentorCandidate, RequesterProfile, SearchFilters};
use crate::services::directory::{DirectoryError, MentorDirectory};

/// In-memory directory
///
/// Used by tests and local runs without a database. Candidates are returned
/// in insertion order.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    profiles: RwLock<HashMap<String, RequesterProfile>>,
    candidates: RwLock<Vec<MentorCandidate>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(profiles: Vec<RequesterProfile>, candidates: Vec<MentorCandidate>) -> Self {
        let directory = Self::new();
        for profile in profiles {
            directory.insert_profile(profile);
        }
        for candidate in candidates {
            directory.insert_candidate(candidate);
        }
        directory
    }

    pub fn insert_profile(&self, profile: RequesterProfile) {
        let mut profiles = self.profiles.write().unwrap_or_else(|e| e.into_inner());
        profiles.insert(profile.user_id.clone(), profile);
    }

    /// Insert a candidate, replacing any existing one with the same id
    pub fn insert_candidate(&self, candidate: MentorCandidate) {
        let mut candidates = self.candidates.write().unwrap_or_else(|e| e.into_inner());
        match candidates.iter_mut().find(|c| c.id == candidate.id) {
            Some(existing) => *existing = candidate,
            None => candidates.push(candidate),
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl MentorDirectory for MemoryDirectory {
    async fn resolve_profile(&self, user_id: &str) -> Result<Option<RequesterProfile>, DirectoryError> {
        let profiles = self.profiles.read().unwrap_or_else(|e| e.into_inner());
        Ok(profiles.get(user_id).cloned())
    }

    async fn list_candidates(&self, filter: CandidateFilter) -> Result<Vec<MentorCandidate>, DirectoryError> {
        let candidates = self.candidates.read().unwrap_or_else(|e| e.into_inner());
        Ok(candidates.iter().filter(|c| filter.accepts(c)).cloned().collect())
    }

    async fn search_candidates(
        &self,
        query: &str,
        filters: SearchFilters,
    ) -> Result<Vec<MentorCandidate>, DirectoryError> {
        let query_folded = normalize(query);
        let filter = CandidateFilter::from(filters);
        let candidates = self.candidates.read().unwrap_or_else(|e| e.into_inner());

        Ok(candidates
            .iter()
            .filter(|c| filter.accepts(c) && matches_search_query(c, &query_folded))
            .cloned()
            .collect())
    }
}
