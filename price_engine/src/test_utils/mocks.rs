use chrono::Duration;
use fx_common::{RateSource, RateTable};
use mockall::mock;
use thiserror::Error;

use crate::traits::{CacheEntry, RateCache, RateCacheError};

#[derive(Debug, Clone, Error)]
pub struct MockErr {
    pub message: String,
}

impl MockErr {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}

impl std::fmt::Display for MockErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

mock! {
    pub Source {}
    impl RateSource for Source {
        type Error = MockErr;
        async fn fetch_latest(&self) -> Result<RateTable, MockErr>;
    }
}

mock! {
    pub Cache {}
    impl RateCache for Cache {
        fn ttl(&self) -> Duration;
        async fn get(&self) -> Result<Option<CacheEntry>, RateCacheError>;
        async fn set(&self, entry: &CacheEntry) -> Result<(), RateCacheError>;
    }
}
