//! Dummy data service
//!
//! Cache-aside over the relational store: reads go through a single Redis
//! key with a fixed TTL, writes hit the database first and then invalidate
//! that key.

use crate::models::DummyData;
use crate::storage::{DataCache, DummyStore};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Cache key holding the JSON-serialized full collection
const DUMMY_DATA_KEY: &str = "dummy_data";

pub struct DummyService {
    store: Arc<dyn DummyStore>,
    cache: Arc<dyn DataCache>,
    cache_ttl: Duration,
}

impl DummyService {
    pub fn new(store: Arc<dyn DummyStore>, cache: Arc<dyn DataCache>, cache_ttl: Duration) -> Self {
        Self {
            store,
            cache,
            cache_ttl,
        }
    }

    /// List all dummy data, serving from the cache when possible
    pub async fn list(&self) -> Result<Vec<DummyData>> {
        // Try cache first
        match self.cache.get(DUMMY_DATA_KEY).await {
            Ok(Some(data)) => {
                if let Ok(items) = serde_json::from_slice::<Vec<DummyData>>(&data) {
                    debug!("Cache hit for {}", DUMMY_DATA_KEY);
                    return Ok(items);
                }
                // Unreadable entry, treat as a miss
                warn!("Discarding unreadable cache entry for {}", DUMMY_DATA_KEY);
            }
            Ok(None) => debug!("Cache miss for {}", DUMMY_DATA_KEY),
            Err(e) => warn!("Cache read failed, falling back to database: {}", e),
        }

        // Fall back to database
        let items = self.store.list_dummy_data().await?;

        // Cache the result for future reads
        match serde_json::to_vec(&items) {
            Ok(bytes) => {
                if let Err(e) = self
                    .cache
                    .set_with_ttl(DUMMY_DATA_KEY, bytes, self.cache_ttl)
                    .await
                {
                    warn!("Failed to cache dummy data: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize dummy data for caching: {}", e),
        }

        Ok(items)
    }

    /// Insert a new row and invalidate the cached collection
    pub async fn create(&self, name: &str) -> Result<DummyData> {
        let created = self.store.insert_dummy_data(name).await?;
        debug!("Created dummy data id={}", created.id);

        self.invalidate_cache().await;

        Ok(created)
    }

    /// Rename an existing row; returns false when the id is unknown
    pub async fn update(&self, id: i32, name: &str) -> Result<bool> {
        if !self.store.dummy_data_exists(id).await? {
            return Ok(false);
        }

        self.store.update_dummy_data(id, name).await?;
        debug!("Updated dummy data id={}", id);

        self.invalidate_cache().await;

        Ok(true)
    }

    /// Delete a row; returns false when the id is unknown
    pub async fn delete(&self, id: i32) -> Result<bool> {
        if !self.store.dummy_data_exists(id).await? {
            return Ok(false);
        }

        self.store.delete_dummy_data(id).await?;
        debug!("Deleted dummy data id={}", id);

        self.invalidate_cache().await;

        Ok(true)
    }

    /// Drop the cached collection after a write; failures are logged, not
    /// propagated
    async fn invalidate_cache(&self) {
        if let Err(e) = self.cache.delete(DUMMY_DATA_KEY).await {
            warn!("Failed to invalidate dummy data cache: {}", e);
        }
    }
}
