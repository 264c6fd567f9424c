use std::{env, time::Duration};

use fx_common::{helpers::env_or_default, Secret};
use log::*;

pub const DEFAULT_PRIMARY_URL: &str = "https://v6.exchangerate-api.com/v6";
pub const DEFAULT_FALLBACK_URL: &str = "https://api.exchangerate-api.com/v4";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct RateProviderConfig {
    /// The credential for the primary provider. If empty, the primary provider is skipped.
    pub api_key: Secret<String>,
    /// Base URL of the keyed primary provider. The key and `latest/USD` are appended to it.
    pub primary_url: String,
    /// Base URL of the keyless fallback provider. `latest/USD` is appended to it.
    pub fallback_url: String,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
}

impl Default for RateProviderConfig {
    fn default() -> Self {
        Self {
            api_key: Secret::default(),
            primary_url: DEFAULT_PRIMARY_URL.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl RateProviderConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_key = Secret::new(env::var("FXP_EXCHANGERATE_API_KEY").unwrap_or_else(|_| {
            warn!("🪛️ FXP_EXCHANGERATE_API_KEY not set. Only the fallback rate provider will be used.");
            String::default()
        }));
        let primary_url = env::var("FXP_PRIMARY_RATES_URL").unwrap_or_else(|_| {
            debug!("🪛️ FXP_PRIMARY_RATES_URL not set, using {DEFAULT_PRIMARY_URL}");
            DEFAULT_PRIMARY_URL.to_string()
        });
        let fallback_url = env::var("FXP_FALLBACK_RATES_URL").unwrap_or_else(|_| {
            debug!("🪛️ FXP_FALLBACK_RATES_URL not set, using {DEFAULT_FALLBACK_URL}");
            DEFAULT_FALLBACK_URL.to_string()
        });
        let timeout = Duration::from_secs(env_or_default("FXP_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS));
        Self { api_key, primary_url, fallback_url, timeout }
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Secret::from(api_key);
        self
    }
}
