use chrono::{DateTime, Duration, Utc};
use fx_common::RateTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RateCacheError {
    #[error("Could not access the rate cache: {0}")]
    StorageError(String),
    #[error("The cached rate entry is corrupt: {0}")]
    CorruptEntry(String),
}

/// A rate table together with the time it was fetched. This is the unit that is persisted, and it is always read and
/// written as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub rates: RateTable,
    pub fetched_at_epoch_millis: i64,
}

impl CacheEntry {
    pub fn new(rates: RateTable, fetched_at: DateTime<Utc>) -> Self {
        Self { rates, fetched_at_epoch_millis: fetched_at.timestamp_millis() }
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.fetched_at_epoch_millis)
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        Duration::milliseconds(now.timestamp_millis() - self.fetched_at_epoch_millis)
    }
}

#[allow(async_fn_in_trait)]
pub trait RateCache {
    /// How long an entry stays fresh after it was fetched.
    fn ttl(&self) -> Duration;

    /// Fetch the current entry, if there is one.
    async fn get(&self) -> Result<Option<CacheEntry>, RateCacheError>;

    /// Replace the current entry with `entry`.
    async fn set(&self, entry: &CacheEntry) -> Result<(), RateCacheError>;

    /// An entry is fresh while it is younger than [`RateCache::ttl`].
    fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        entry.age(now) < self.ttl()
    }
}
