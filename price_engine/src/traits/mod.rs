//! # Storage contracts
//!
//! The price engine keeps exactly one piece of shared, mutable state: the most recently fetched exchange-rate table.
//! Rather than reaching for a storage key directly, every consumer goes through the [`RateCache`] trait, which any
//! backend (a file on disk, an in-memory slot, browser storage behind an FFI boundary) can implement.
//!
//! Remote rate providers are described by [`fx_common::RateSource`].
mod rate_cache;

pub use rate_cache::{CacheEntry, RateCache, RateCacheError};
