use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use crate::models::{CandidateFilter, MentorCandidate, RequesterProfile, SearchFilters};
use crate::services::directory::{DirectoryError, MentorDirectory};

/// Read-through cache in front of a mentor directory
///
/// Caches resolved requester profiles and candidate pools per pre-filter.
/// Unknown users and search results are never cached. Entries may be stale
/// for up to the TTL; the matcher re-checks eligibility on every call.
pub struct CachedDirectory {
    inner: Arc<dyn MentorDirectory>,
    profiles: moka::future::Cache<String, RequesterProfile>,
    candidates: moka::future::Cache<String, Arc<Vec<MentorCandidate>>>,
}

impl CachedDirectory {
    /// Create a new cached directory
    pub fn new(inner: Arc<dyn MentorDirectory>, capacity: u64, ttl_secs: u64) -> Self {
        let ttl = Duration::from_secs(ttl_secs);

        Self {
            inner,
            profiles: moka::future::CacheBuilder::new(capacity).time_to_live(ttl).build(),
            candidates: moka::future::CacheBuilder::new(capacity).time_to_live(ttl).build(),
        }
    }

    /// Drop every cached entry
    pub fn invalidate_all(&self) {
        self.profiles.invalidate_all();
        self.candidates.invalidate_all();
        tracing::debug!("Invalidated directory cache");
    }
}

#[async_trait]
impl MentorDirectory for CachedDirectory {
    async fn resolve_profile(&self, user_id: &str) -> Result<Option<RequesterProfile>, DirectoryError> {
        let key = CacheKey::profile(user_id);

        if let Some(profile) = self.profiles.get(&key).await {
            tracing::trace!("Cache hit: {}", key);
            return Ok(Some(profile));
        }

        let profile = self.inner.resolve_profile(user_id).await?;
        if let Some(profile) = &profile {
            self.profiles.insert(key, profile.clone()).await;
        }

        Ok(profile)
    }

    async fn list_candidates(&self, filter: CandidateFilter) -> Result<Vec<MentorCandidate>, DirectoryError> {
        let key = CacheKey::candidates(&filter);

        if let Some(pool) = self.candidates.get(&key).await {
            tracing::trace!("Cache hit: {}", key);
            return Ok(pool.as_ref().clone());
        }

        let pool = self.inner.list_candidates(filter).await?;
        self.candidates.insert(key, Arc::new(pool.clone())).await;

        Ok(pool)
    }

    async fn search_candidates(
        &self,
        query: &str,
        filters: SearchFilters,
    ) -> Result<Vec<MentorCandidate>, DirectoryError> {
        self.inner.search_candidates(query, filters).await
    }

    async fn health_check(&self) -> Result<bool, DirectoryError> {
        self.inner.health_check().await
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a requester profile
    pub fn profile(user_id: &str) -> String {
        format!("profile:{}", user_id)
    }

    /// Build a cache key for a pre-filtered candidate pool
    pub fn candidates(filter: &CandidateFilter) -> String {
        let availability = filter.availability.map(|a| a.as_str()).unwrap_or("any");
        let remote = match filter.accepts_remote {
            Some(true) => "remote",
            Some(false) => "onsite",
            None => "any",
        };
        format!("candidates:{}:{}", availability, remote)
    }
}
