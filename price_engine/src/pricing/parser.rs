//! Turns the free-form price strings found in booking and search data into a [`ParsedPrice`].
//!
//! The recognised shapes are tried in this order, and the first match wins:
//! 1. `৳44,640`: a taka sign and a number (BDT).
//! 2. `USD 288`: a currency code, whitespace, and a number.
//! 3. `288 USD`: a number, whitespace, and a currency code.
//! 4. `288`: a bare number (USD).
//! 5. `€50`: a currency symbol and a number. Symbols that are not in [`fx_common::CURRENCY_SYMBOLS`] are read as USD.
//!
//! Numbers are ASCII digits with optional grouping commas and a decimal point. Commas are stripped before the number
//! is parsed.
use std::{fmt::Display, str::FromStr};

use fx_common::{CurrencyCode, CurrencyCodeError};
use log::*;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

const NUMBER: &str = r"([0-9][0-9,]*(?:\.[0-9]*)?)";

static TAKA_PREFIX: Lazy<Regex> = Lazy::new(|| pattern(&format!(r"^৳\s*{NUMBER}$")));
static CODE_PREFIX: Lazy<Regex> = Lazy::new(|| pattern(&format!(r"^([A-Z]{{3}})\s+{NUMBER}$")));
static CODE_SUFFIX: Lazy<Regex> = Lazy::new(|| pattern(&format!(r"^{NUMBER}\s+([A-Z]{{3}})$")));
static BARE_NUMBER: Lazy<Regex> = Lazy::new(|| pattern(&format!(r"^{NUMBER}$")));
static SYMBOL_PREFIX: Lazy<Regex> = Lazy::new(|| pattern(&format!(r"^(\p{{Sc}})\s*{NUMBER}$")));

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("Invalid price pattern")
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceParseError {
    #[error("The price string is empty")]
    Empty,
    #[error("'{0}' does not look like a price")]
    UnrecognizedFormat(String),
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("{0}")]
    InvalidCurrency(#[from] CurrencyCodeError),
}

/// An amount of money in a given currency, as read from a price string.
///
/// `amount` is always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedPrice {
    pub amount: f64,
    pub currency: CurrencyCode,
}

impl ParsedPrice {
    /// The value used for anything that cannot be parsed: zero US dollars.
    pub const FALLBACK: Self = Self { amount: 0.0, currency: CurrencyCode::USD };

    pub fn new(amount: f64, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    fn from_parts(digits: &str, currency: CurrencyCode) -> Result<Self, PriceParseError> {
        let amount = digits
            .replace(',', "")
            .parse::<f64>()
            .map_err(|_| PriceParseError::InvalidAmount(digits.to_string()))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(PriceParseError::InvalidAmount(digits.to_string()));
        }
        Ok(Self { amount, currency })
    }
}

impl Default for ParsedPrice {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl FromStr for ParsedPrice {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceParseError::Empty);
        }
        if let Some(caps) = TAKA_PREFIX.captures(s) {
            return Self::from_parts(&caps[1], CurrencyCode::BDT);
        }
        if let Some(caps) = CODE_PREFIX.captures(s) {
            return Self::from_parts(&caps[2], caps[1].parse()?);
        }
        if let Some(caps) = CODE_SUFFIX.captures(s) {
            return Self::from_parts(&caps[1], caps[2].parse()?);
        }
        if let Some(caps) = BARE_NUMBER.captures(s) {
            return Self::from_parts(&caps[1], CurrencyCode::USD);
        }
        if let Some(caps) = SYMBOL_PREFIX.captures(s) {
            let currency = caps[1].chars().next().and_then(CurrencyCode::from_symbol).unwrap_or_else(|| {
                debug!("💱️ Unknown currency symbol '{}' in '{s}'. Assuming USD.", &caps[1]);
                CurrencyCode::USD
            });
            return Self::from_parts(&caps[2], currency);
        }
        Err(PriceParseError::UnrecognizedFormat(s.to_string()))
    }
}

impl Display for ParsedPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

/// Parse a price string, falling back to [`ParsedPrice::FALLBACK`] instead of failing.
///
/// Missing and blank input return the fallback straight away. Input that is present but unrecognisable also returns
/// the fallback, and logs a warning.
pub fn parse_price(input: Option<&str>) -> ParsedPrice {
    let Some(s) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return ParsedPrice::FALLBACK;
    };
    s.parse().unwrap_or_else(|e| {
        warn!("💱️ Could not parse price '{s}'. {e}. Using {} instead.", ParsedPrice::FALLBACK);
        ParsedPrice::FALLBACK
    })
}
