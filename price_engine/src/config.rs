use std::{env, path::PathBuf};

use chrono::Duration;
use fx_common::{helpers::env_or_default, CurrencyCode};
use log::*;

use crate::{
    cache::DEFAULT_RATES_TTL,
    pricing::{
        markup::{DEFAULT_FLIGHT_MARKUP, DEFAULT_HOTEL_MARKUP},
        MarkupPolicy,
        PriceConverter,
    },
};

const DEFAULT_CACHE_FILE: &str = "fx_rates.json";
const CACHE_DIR_NAME: &str = "fx-pricing";

/// Settings for the pricing engine. Everything has a sensible default, so the engine works out of the box.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The currency prices are displayed in.
    pub target_currency: CurrencyCode,
    pub markup: MarkupPolicy,
    /// How long a fetched rate table is used before it is fetched again.
    pub rates_ttl: Duration,
    /// Where [`FileRateCache`](crate::FileRateCache) keeps the rate table.
    pub cache_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_currency: CurrencyCode::BDT,
            markup: MarkupPolicy::default(),
            rates_ttl: DEFAULT_RATES_TTL,
            cache_path: default_cache_path(),
        }
    }
}

impl EngineConfig {
    /// Builds the configuration from `FXP_*` environment variables. Missing or invalid values are logged and replaced
    /// by their defaults.
    pub fn from_env_or_default() -> Self {
        let target_currency = env_or_default("FXP_TARGET_CURRENCY", CurrencyCode::BDT);
        let hotel = non_negative("FXP_MARKUP_HOTEL", DEFAULT_HOTEL_MARKUP);
        let flight = non_negative("FXP_MARKUP_FLIGHT", DEFAULT_FLIGHT_MARKUP);
        let ttl_minutes = env_or_default("FXP_RATES_TTL_MINUTES", DEFAULT_RATES_TTL.num_minutes());
        let rates_ttl = if ttl_minutes > 0 {
            Duration::minutes(ttl_minutes)
        } else {
            warn!("🪛️ FXP_RATES_TTL_MINUTES must be positive. Using the default of {DEFAULT_RATES_TTL}.");
            DEFAULT_RATES_TTL
        };
        let cache_path = env::var("FXP_RATES_CACHE_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_cache_path);
        debug!("🪛️ Rates will be cached at {} for {} minutes", cache_path.display(), rates_ttl.num_minutes());
        Self { target_currency, markup: MarkupPolicy::new(hotel, flight), rates_ttl, cache_path }
    }

    pub fn converter(&self) -> PriceConverter {
        PriceConverter::new(self.target_currency, self.markup.clone())
    }
}

fn non_negative(name: &str, default: f64) -> f64 {
    let value = env_or_default(name, default);
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("🪛️ {name} must be a non-negative percentage. Using the default of {default}.");
        default
    }
}

/// The platform cache directory, or the working directory if there isn't one.
pub fn default_cache_path() -> PathBuf {
    match dirs::cache_dir() {
        Some(dir) => dir.join(CACHE_DIR_NAME).join(DEFAULT_CACHE_FILE),
        None => {
            warn!("🪛️ This platform has no cache directory. Rates will be cached in the working directory.");
            PathBuf::from(DEFAULT_CACHE_FILE)
        },
    }
}
