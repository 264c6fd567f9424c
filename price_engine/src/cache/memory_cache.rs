use chrono::Duration;
use tokio::sync::RwLock;

use crate::traits::{CacheEntry, RateCache, RateCacheError};

/// A rate cache that lives only as long as the process.
#[derive(Debug)]
pub struct MemoryRateCache {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl MemoryRateCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: RwLock::new(None) }
    }

    pub fn with_entry(ttl: Duration, entry: CacheEntry) -> Self {
        Self { ttl, entry: RwLock::new(Some(entry)) }
    }
}

impl Default for MemoryRateCache {
    fn default() -> Self {
        Self::new(super::DEFAULT_RATES_TTL)
    }
}

impl RateCache for MemoryRateCache {
    fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn get(&self) -> Result<Option<CacheEntry>, RateCacheError> {
        Ok(self.entry.read().await.clone())
    }

    async fn set(&self, entry: &CacheEntry) -> Result<(), RateCacheError> {
        *self.entry.write().await = Some(entry.clone());
        Ok(())
    }
}
