use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::CurrencyCode;

/// Every rate table is quoted against this currency.
pub const BASE_CURRENCY: CurrencyCode = CurrencyCode::USD;

#[derive(Debug, Clone, Error)]
pub enum RateTableError {
    #[error("Invalid currency code in rate table: {0}")]
    InvalidCurrency(String),
    #[error("Invalid rate for {currency}: {rate}. Rates must be positive and finite")]
    InvalidRate { currency: String, rate: f64 },
}

/// Units of each currency per one unit of [`BASE_CURRENCY`].
///
/// Every rate in the table is positive and finite. The base currency is implicitly 1, whether or not the source
/// included it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from raw (code, rate) pairs, as they typically arrive from a JSON API.
    pub fn from_raw<I, S>(rates: I) -> Result<Self, RateTableError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for (code, rate) in rates {
            let code = code.as_ref();
            let currency =
                code.parse::<CurrencyCode>().map_err(|_| RateTableError::InvalidCurrency(code.to_string()))?;
            table.insert(currency, rate)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, currency: CurrencyCode, rate: f64) -> Result<(), RateTableError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RateTableError::InvalidRate { currency: currency.to_string(), rate });
        }
        self.rates.insert(currency, rate);
        Ok(())
    }

    /// Builder-style variant of [`RateTable::insert`].
    pub fn with_rate(mut self, currency: CurrencyCode, rate: f64) -> Result<Self, RateTableError> {
        self.insert(currency, rate)?;
        Ok(self)
    }

    /// The number of `currency` units in one unit of the base currency.
    pub fn rate(&self, currency: CurrencyCode) -> Option<f64> {
        match self.rates.get(&currency) {
            Some(rate) => Some(*rate),
            None if currency == BASE_CURRENCY => Some(1.0),
            None => None,
        }
    }

    pub fn contains(&self, currency: CurrencyCode) -> bool {
        self.rate(currency).is_some()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate over the table in currency code order.
    pub fn iter(&self) -> impl Iterator<Item = (CurrencyCode, f64)> + '_ {
        self.rates.iter().map(|(code, rate)| (*code, *rate))
    }
}

impl TryFrom<BTreeMap<String, f64>> for RateTable {
    type Error = RateTableError;

    fn try_from(value: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

impl TryFrom<HashMap<String, f64>> for RateTable {
    type Error = RateTableError;

    fn try_from(value: HashMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

impl From<RateTable> for BTreeMap<String, f64> {
    fn from(table: RateTable) -> Self {
        table.rates.into_iter().map(|(code, rate)| (code.to_string(), rate)).collect()
    }
}
