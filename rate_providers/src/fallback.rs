use fx_common::{RateSource, RateTable, BASE_CURRENCY};
use log::*;

use crate::{api::RestClient, OpenRatesResponse, RateProviderConfig, RateProviderError};

/// Client for the keyless exchangerate-api.com v4 endpoint.
#[derive(Clone)]
pub struct OpenRatesApi {
    config: RateProviderConfig,
    client: RestClient,
}

impl OpenRatesApi {
    pub fn new(config: RateProviderConfig) -> Result<Self, RateProviderError> {
        let client = RestClient::new(&config)?;
        Ok(Self { config, client })
    }

    pub fn url(&self) -> String {
        format!("{}/latest/{BASE_CURRENCY}", self.config.fallback_url)
    }

    pub async fn fetch_latest_rates(&self) -> Result<OpenRatesResponse, RateProviderError> {
        let url = self.url();
        debug!("Fetching latest rates from the fallback provider");
        let response = self.client.get_json::<OpenRatesResponse>(&url, &url).await?;
        trace!("Fallback provider rates last updated {:?}", response.last_updated());
        Ok(response)
    }
}

impl RateSource for OpenRatesApi {
    type Error = RateProviderError;

    fn name(&self) -> &str {
        "exchangerate-api (v4)"
    }

    async fn fetch_latest(&self) -> Result<RateTable, Self::Error> {
        let table = self.fetch_latest_rates().await?.into_rate_table()?;
        info!("Fetched {} exchange rates from the fallback provider", table.len());
        Ok(table)
    }
}
