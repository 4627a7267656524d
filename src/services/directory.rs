use async_trait::async_trait;
use thiserror::Error;
use crate::models::{CandidateFilter, MentorCandidate, RequesterProfile, SearchFilters};

/// Errors that can occur when loading profiles or candidates
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid row: {0}")]
    InvalidRow(String),
}

/// Source of requester profiles and mentor candidates
///
/// Implemented by the PostgreSQL store, the in-memory store and the cache
/// wrapper. The matching engine never talks to it directly.
#[async_trait]
pub trait MentorDirectory: Send + Sync {
    /// Resolve a user id to a requester profile, `None` if unknown
    async fn resolve_profile(&self, user_id: &str) -> Result<Option<RequesterProfile>, DirectoryError>;

    /// Load the mentor pool, narrowed by the pre-filter
    async fn list_candidates(&self, filter: CandidateFilter) -> Result<Vec<MentorCandidate>, DirectoryError>;

    /// Load mentors that may match a search query
    ///
    /// May return a superset; the engine re-applies the query.
    async fn search_candidates(
        &self,
        query: &str,
        filters: SearchFilters,
    ) -> Result<Vec<MentorCandidate>, DirectoryError>;

    /// Health check for the backing store
    async fn health_check(&self) -> Result<bool, DirectoryError> {
        Ok(true)
    }
}
