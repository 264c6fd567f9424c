//! Loads the exchange-rate table, using the cache to avoid redundant network calls.
//!
//! Concurrent callers are not coordinated. If two of them find the cache stale at the same time, both fetch, and the
//! last one to finish is what stays in the cache.
use std::fmt::Debug;

use chrono::{DateTime, Utc};
use fx_common::{RateSource, RateTable};
use log::*;

use crate::{
    fx_api::errors::RateLoadError,
    traits::{CacheEntry, RateCache},
};

pub struct RatesApi<C, P, F> {
    cache: C,
    primary: P,
    fallback: F,
}

impl<C, P, F> Debug for RatesApi<C, P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RatesApi")
    }
}

impl<C, P, F> RatesApi<C, P, F>
where
    C: RateCache,
    P: RateSource,
    F: RateSource,
{
    pub fn new(cache: C, primary: P, fallback: F) -> Self {
        Self { cache, primary, fallback }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Returns the rate table, fetching a new one only if the cached one is missing or stale.
    pub async fn load_rates(&self) -> Result<RateTable, RateLoadError> {
        self.load_rates_at(Utc::now()).await
    }

    /// As [`RatesApi::load_rates`], with `now` standing in for the current time.
    pub async fn load_rates_at(&self, now: DateTime<Utc>) -> Result<RateTable, RateLoadError> {
        match self.cached_entry().await {
            Some(entry) if self.cache.is_fresh(&entry, now) => {
                debug!("💱️ Using cached rates, fetched {} minutes ago", entry.age(now).num_minutes());
                return Ok(entry.rates);
            },
            Some(entry) => info!("💱️ Cached rates are {} minutes old. Refreshing.", entry.age(now).num_minutes()),
            None => info!("💱️ No cached rates. Fetching."),
        }
        self.fetch_and_store(now).await
    }

    /// Fetches a new rate table regardless of the state of the cache.
    pub async fn refresh_rates(&self) -> Result<RateTable, RateLoadError> {
        self.fetch_and_store(Utc::now()).await
    }

    /// The cached entry, fresh or not. Cache read failures are logged and reported as `None`.
    pub async fn cached_entry(&self) -> Option<CacheEntry> {
        self.cache.get().await.unwrap_or_else(|e| {
            warn!("💱️ Could not read the rate cache. Treating it as empty. {e}");
            None
        })
    }

    async fn fetch_and_store(&self, now: DateTime<Utc>) -> Result<RateTable, RateLoadError> {
        let rates = match self.primary.fetch_latest().await {
            Ok(rates) => rates,
            Err(primary_err) => {
                warn!(
                    "💱️ Could not fetch rates from {}. {primary_err}. Trying {}.",
                    self.primary.name(),
                    self.fallback.name()
                );
                match self.fallback.fetch_latest().await {
                    Ok(rates) => rates,
                    Err(fallback_err) => {
                        error!("💱️ Could not fetch rates from {} either. {fallback_err}", self.fallback.name());
                        return Err(RateLoadError::AllSourcesFailed {
                            primary: primary_err.to_string(),
                            fallback: fallback_err.to_string(),
                        });
                    },
                }
            },
        };
        let entry = CacheEntry::new(rates, now);
        if let Err(e) = self.cache.set(&entry).await {
            warn!("💱️ Could not save the new rates to the cache. They will be fetched again next time. {e}");
        }
        Ok(entry.rates)
    }
}
