use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use serde::de::DeserializeOwned;

use crate::{RateProviderConfig, RateProviderError};

/// The plumbing shared by both providers: a configured client and a JSON GET helper.
#[derive(Clone)]
pub(crate) struct RestClient {
    client: Arc<Client>,
}

impl RestClient {
    pub fn new(config: &RateProviderConfig) -> Result<Self, RateProviderError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| RateProviderError::Initialization(e.to_string()))?;
        Ok(Self { client: Arc::new(client) })
    }

    /// Sends a GET request to `url` and deserializes the JSON body. `label` is what gets logged in place of the URL,
    /// since some provider URLs embed the API key.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, label: &str) -> Result<T, RateProviderError> {
        trace!("Sending REST query: {label}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RateProviderError::RestResponseError(e.without_url().to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| RateProviderError::JsonError(e.without_url().to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .map_err(|e| RateProviderError::RestResponseError(e.without_url().to_string()))?;
            Err(RateProviderError::QueryError { status, message })
        }
    }
}
