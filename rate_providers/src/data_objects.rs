use std::collections::HashMap;

use chrono::{DateTime, Utc};
use fx_common::{RateTable, BASE_CURRENCY};
use serde::{Deserialize, Serialize};

use crate::RateProviderError;

/// Response body of the primary provider's `latest/{base}` endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LatestRatesResponse {
    pub result: String,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub time_last_update_unix: Option<i64>,
    #[serde(default)]
    pub conversion_rates: HashMap<String, f64>,
    #[serde(rename = "error-type", default)]
    pub error_type: Option<String>,
}

impl LatestRatesResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.time_last_update_unix.and_then(|t| DateTime::from_timestamp(t, 0))
    }

    pub fn into_rate_table(self) -> Result<RateTable, RateProviderError> {
        if !self.is_success() {
            let reason = self.error_type.unwrap_or_else(|| format!("result was '{}'", self.result));
            return Err(RateProviderError::Unsuccessful(reason));
        }
        check_base(self.base_code.as_deref())?;
        to_rate_table(self.conversion_rates)
    }
}

/// Response body of the fallback provider. There is no status field; the `rates` map is the whole contract, so it
/// is checked explicitly rather than assumed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OpenRatesResponse {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub time_last_updated: Option<i64>,
    #[serde(default)]
    pub rates: Option<HashMap<String, f64>>,
}

impl OpenRatesResponse {
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.time_last_updated.and_then(|t| DateTime::from_timestamp(t, 0))
    }

    pub fn into_rate_table(self) -> Result<RateTable, RateProviderError> {
        check_base(self.base.as_deref())?;
        let rates = self.rates.ok_or_else(|| RateProviderError::InvalidRates("'rates' is missing".to_string()))?;
        to_rate_table(rates)
    }
}

fn check_base(base: Option<&str>) -> Result<(), RateProviderError> {
    match base {
        Some(b) if b != BASE_CURRENCY.as_str() => {
            Err(RateProviderError::InvalidRates(format!("Expected rates based on {BASE_CURRENCY}, not {b}")))
        },
        _ => Ok(()),
    }
}

fn to_rate_table(rates: HashMap<String, f64>) -> Result<RateTable, RateProviderError> {
    if rates.is_empty() {
        return Err(RateProviderError::InvalidRates("the rate table is empty".to_string()));
    }
    RateTable::from_raw(rates).map_err(|e| RateProviderError::InvalidRates(e.to_string()))
}

#[cfg(test)]
mod test {
    use fx_common::CurrencyCode;

    use super::*;

    #[test]
    fn primary_success() {
        let json = r#"{
            "result": "success",
            "documentation": "https://www.exchangerate-api.com/docs",
            "time_last_update_unix": 1718236801,
            "base_code": "USD",
            "conversion_rates": { "USD": 1, "BDT": 117.45, "EUR": 0.9251 }
        }"#;
        let response: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert_eq!(response.last_updated().unwrap().timestamp(), 1718236801);
        let table = response.into_rate_table().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rate(CurrencyCode::BDT), Some(117.45));
    }

    #[test]
    fn primary_failure() {
        let json = r#"{ "result": "error", "error-type": "invalid-key" }"#;
        let response: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_success());
        match response.into_rate_table() {
            Err(RateProviderError::Unsuccessful(reason)) => assert_eq!(reason, "invalid-key"),
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn primary_wrong_base() {
        let json = r#"{ "result": "success", "base_code": "EUR", "conversion_rates": { "BDT": 127.0 } }"#;
        let response: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(response.into_rate_table(), Err(RateProviderError::InvalidRates(_))));
    }

    #[test]
    fn fallback_success() {
        let json = r#"{ "base": "USD", "date": "2024-06-13", "time_last_updated": 1718236801,
                        "rates": { "USD": 1, "BDT": 117.5, "GBP": 0.78 } }"#;
        let response: OpenRatesResponse = serde_json::from_str(json).unwrap();
        let table = response.into_rate_table().unwrap();
        assert_eq!(table.rate(CurrencyCode::GBP), Some(0.78));
    }

    #[test]
    fn fallback_schema_is_checked() {
        let missing: OpenRatesResponse = serde_json::from_str(r#"{ "base": "USD" }"#).unwrap();
        assert!(matches!(missing.into_rate_table(), Err(RateProviderError::InvalidRates(_))));

        let empty: OpenRatesResponse = serde_json::from_str(r#"{ "rates": {} }"#).unwrap();
        assert!(matches!(empty.into_rate_table(), Err(RateProviderError::InvalidRates(_))));

        let negative: OpenRatesResponse = serde_json::from_str(r#"{ "rates": { "BDT": -117.5 } }"#).unwrap();
        assert!(matches!(negative.into_rate_table(), Err(RateProviderError::InvalidRates(_))));

        let wrong_shape = serde_json::from_str::<OpenRatesResponse>(r#"{ "rates": [1, 2, 3] }"#);
        assert!(wrong_shape.is_err());
    }
}
