use anyhow::{Context, Result};
use log::*;
use price_engine::{EngineConfig, FileRateCache, RatesApi};
use rate_providers::{ExchangeRateApi, OpenRatesApi, RateProviderConfig};

pub type CliRatesApi = RatesApi<FileRateCache, ExchangeRateApi, OpenRatesApi>;

/// Builds the rates API from the environment: the file cache from `FXP_RATES_*`, and both providers from the
/// provider settings.
pub fn rates_api(config: &EngineConfig) -> Result<CliRatesApi> {
    let providers = RateProviderConfig::new_from_env_or_default();
    if providers.api_key.is_empty() {
        info!("🖥️ FXP_EXCHANGERATE_API_KEY is not set. Rates will come from the fallback provider.");
    }
    let primary = ExchangeRateApi::new(providers.clone()).context("Could not create the primary rates client")?;
    let fallback = OpenRatesApi::new(providers).context("Could not create the fallback rates client")?;
    let cache = FileRateCache::new(&config.cache_path, config.rates_ttl);
    Ok(RatesApi::new(cache, primary, fallback))
}
