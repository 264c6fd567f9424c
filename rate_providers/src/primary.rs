use fx_common::{RateSource, RateTable, BASE_CURRENCY};
use log::*;

use crate::{api::RestClient, LatestRatesResponse, RateProviderConfig, RateProviderError};

/// Client for the keyed exchangerate-api.com v6 endpoint.
#[derive(Clone)]
pub struct ExchangeRateApi {
    config: RateProviderConfig,
    client: RestClient,
}

impl ExchangeRateApi {
    pub fn new(config: RateProviderConfig) -> Result<Self, RateProviderError> {
        let client = RestClient::new(&config)?;
        Ok(Self { config, client })
    }

    pub fn url(&self) -> String {
        format!("{}/{}/latest/{BASE_CURRENCY}", self.config.primary_url, self.config.api_key.reveal())
    }

    /// The request URL with the API key masked, for logging.
    fn redacted_url(&self) -> String {
        format!("{}/{}/latest/{BASE_CURRENCY}", self.config.primary_url, self.config.api_key)
    }

    pub async fn fetch_latest_rates(&self) -> Result<LatestRatesResponse, RateProviderError> {
        if self.config.api_key.is_empty() {
            return Err(RateProviderError::MissingApiKey(self.config.primary_url.clone()));
        }
        debug!("Fetching latest rates from the primary provider");
        let response = self.client.get_json::<LatestRatesResponse>(&self.url(), &self.redacted_url()).await?;
        trace!("Primary provider said '{}'. Rates last updated {:?}", response.result, response.last_updated());
        Ok(response)
    }
}

impl RateSource for ExchangeRateApi {
    type Error = RateProviderError;

    fn name(&self) -> &str {
        "exchangerate-api (v6)"
    }

    async fn fetch_latest(&self) -> Result<RateTable, Self::Error> {
        let table = self.fetch_latest_rates().await?.into_rate_table()?;
        info!("Fetched {} exchange rates from the primary provider", table.len());
        Ok(table)
    }
}
