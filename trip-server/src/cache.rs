//! Caching layer for catalog responses.
//!
//! Catalog searches are the expensive part of planning: identical queries
//! within a short window return the same candidates, so each category gets a
//! TTL-bounded cache keyed by the query value itself. Query types enforce
//! their invariants at construction, which makes them well-behaved keys.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::catalog::{CatalogClient, CatalogError};
use crate::domain::{
    ActivityOption, ActivityQuery, StayOption, StayQuery, TransportOption, TransportQuery,
};

/// Configuration for the catalog cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries per category.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(120),
            max_capacity: 1000,
        }
    }
}

/// Catalog client with per-category response caching.
///
/// Wraps a [`CatalogClient`] and caches each category's search results under
/// the query that produced them. Entries are shared via `Arc`, so repeated
/// hits never clone the option lists.
pub struct CachedCatalogClient {
    client: CatalogClient,
    transports: MokaCache<TransportQuery, Arc<Vec<TransportOption>>>,
    stays: MokaCache<StayQuery, Arc<Vec<StayOption>>>,
    activities: MokaCache<ActivityQuery, Arc<Vec<ActivityOption>>>,
}

impl CachedCatalogClient {
    /// Create a new cached client.
    pub fn new(client: CatalogClient, config: &CacheConfig) -> Self {
        Self {
            client,
            transports: MokaCache::builder()
                .time_to_live(config.ttl)
                .max_capacity(config.max_capacity)
                .build(),
            stays: MokaCache::builder()
                .time_to_live(config.ttl)
                .max_capacity(config.max_capacity)
                .build(),
            activities: MokaCache::builder()
                .time_to_live(config.ttl)
                .max_capacity(config.max_capacity)
                .build(),
        }
    }

    /// Search transports, using the cache if available.
    pub async fn search_transports(
        &self,
        query: &TransportQuery,
    ) -> Result<Arc<Vec<TransportOption>>, CatalogError> {
        if let Some(cached) = self.transports.get(query).await {
            return Ok(cached);
        }

        let options = Arc::new(self.client.search_transports(query).await?);
        self.transports.insert(query.clone(), options.clone()).await;

        Ok(options)
    }

    /// Search stays, using the cache if available.
    pub async fn search_stays(
        &self,
        query: &StayQuery,
    ) -> Result<Arc<Vec<StayOption>>, CatalogError> {
        if let Some(cached) = self.stays.get(query).await {
            return Ok(cached);
        }

        let options = Arc::new(self.client.search_stays(query).await?);
        self.stays.insert(query.clone(), options.clone()).await;

        Ok(options)
    }

    /// Search activities, using the cache if available.
    pub async fn search_activities(
        &self,
        query: &ActivityQuery,
    ) -> Result<Arc<Vec<ActivityOption>>, CatalogError> {
        if let Some(cached) = self.activities.get(query).await {
            return Ok(cached);
        }

        let options = Arc::new(self.client.search_activities(query).await?);
        self.activities.insert(query.clone(), options.clone()).await;

        Ok(options)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Total cached entries across all categories (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.transports.entry_count() + self.stays.entry_count() + self.activities.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.transports.invalidate_all();
        self.stays.invalidate_all();
        self.activities.invalidate_all();
    }
}
