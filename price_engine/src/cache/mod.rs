//! [`RateCache`](crate::traits::RateCache) backends.
mod file_cache;
mod memory_cache;

pub use file_cache::FileRateCache;
pub use memory_cache::MemoryRateCache;

/// The default time an exchange-rate table stays fresh: 4 hours.
pub const DEFAULT_RATES_TTL: chrono::Duration = chrono::Duration::hours(4);
