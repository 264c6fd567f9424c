use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use cucumber::World;
use fx_common::{CurrencyCode, RateTable};
use log::*;
use price_engine::{
    test_utils::{
        prepare_env::{prepare_test_env, random_cache_path},
        ScriptedRateSource,
    },
    FileRateCache,
    MarkupPolicy,
    PriceConverter,
    PriceDisplay,
    PricingApi,
    RateLoadError,
    RatesApi,
    DEFAULT_RATES_TTL,
};

pub type TestRatesApi = RatesApi<FileRateCache, ScriptedRateSource, ScriptedRateSource>;

#[derive(Debug, World)]
pub struct PriceWorld {
    pub converter: PriceConverter,
    pub rates: Option<RateTable>,
    pub primary: ScriptedRateSource,
    pub fallback: ScriptedRateSource,
    pub cache_path: PathBuf,
    pub ttl: Duration,
    pub now: DateTime<Utc>,
    pub display: Option<PriceDisplay>,
    pub batch: Vec<PriceDisplay>,
    pub load_result: Option<Result<RateTable, RateLoadError>>,
}

impl Default for PriceWorld {
    fn default() -> Self {
        prepare_test_env();
        let cache_path = random_cache_path();
        debug!("🌍️ Rate cache for this scenario: {}", cache_path.display());
        Self {
            converter: PriceConverter::default(),
            rates: None,
            primary: ScriptedRateSource::new("primary"),
            fallback: ScriptedRateSource::new("fallback"),
            cache_path,
            ttl: DEFAULT_RATES_TTL,
            now: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            display: None,
            batch: Vec::new(),
            load_result: None,
        }
    }
}

impl PriceWorld {
    pub fn set_target_currency(&mut self, target: CurrencyCode) {
        self.converter = PriceConverter::new(target, MarkupPolicy::default());
    }

    /// A fresh API over the scenario's cache file. Each call behaves like a new process sharing the same cache.
    pub fn rates_api(&self) -> TestRatesApi {
        let cache = FileRateCache::new(&self.cache_path, self.ttl);
        RatesApi::new(cache, self.primary.clone(), self.fallback.clone())
    }

    pub fn pricing_api(&self) -> PricingApi<FileRateCache, ScriptedRateSource, ScriptedRateSource> {
        PricingApi::new(self.rates_api(), self.converter.clone())
    }

    pub fn source(&self, which: &str) -> &ScriptedRateSource {
        match which {
            "primary" => &self.primary,
            "fallback" => &self.fallback,
            _ => panic!("Unknown rate source: {which}"),
        }
    }

    pub fn loaded_rates(&self) -> &RateTable {
        match &self.load_result {
            Some(Ok(rates)) => rates,
            Some(Err(e)) => panic!("Rates failed to load: {e}"),
            None => panic!("Rates have not been loaded"),
        }
    }

    pub fn cleanup(&self) {
        match std::fs::remove_file(&self.cache_path) {
            Ok(()) => trace!("🌍️ Removed {}", self.cache_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {},
            Err(e) => warn!("🌍️ Could not remove {}. {e}", self.cache_path.display()),
        }
    }
}

/// Parses a rate list of the form "BDT=110, EUR=0.92".
pub fn parse_rates(s: &str) -> RateTable {
    let pairs = s
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let (code, rate) = p.split_once('=').unwrap_or_else(|| panic!("Invalid rate pair: {p}"));
            (code.trim().to_string(), rate.trim().parse::<f64>().expect("Invalid rate"))
        })
        .collect::<Vec<_>>();
    RateTable::from_raw(pairs).expect("Invalid rate table")
}
