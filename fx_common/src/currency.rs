use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currency symbols recognised in price strings, and the currency each one resolves to.
pub const CURRENCY_SYMBOLS: [(char, CurrencyCode); 8] = [
    ('$', CurrencyCode::USD),
    ('€', CurrencyCode::EUR),
    ('£', CurrencyCode::GBP),
    ('¥', CurrencyCode::JPY),
    ('₹', CurrencyCode::INR),
    ('৳', CurrencyCode::BDT),
    ('₽', CurrencyCode::RUB),
    ('฿', CurrencyCode::THB),
];

//--------------------------------------   CurrencyCode    ---------------------------------------------------------
/// A three-letter, upper case, ISO-4217 style currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Not a valid currency code: {0}")]
pub struct CurrencyCodeError(String);

impl CurrencyCode {
    pub const BDT: Self = Self(*b"BDT");
    pub const EUR: Self = Self(*b"EUR");
    pub const GBP: Self = Self(*b"GBP");
    pub const INR: Self = Self(*b"INR");
    pub const JPY: Self = Self(*b"JPY");
    pub const RUB: Self = Self(*b"RUB");
    pub const THB: Self = Self(*b"THB");
    pub const USD: Self = Self(*b"USD");

    pub fn as_str(&self) -> &str {
        // Construction only ever admits ASCII upper case letters
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Resolve a currency symbol. Returns `None` for symbols that are not in [`CURRENCY_SYMBOLS`].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        CURRENCY_SYMBOLS.iter().find(|(s, _)| *s == symbol).map(|(_, code)| *code)
    }

    /// The display symbol for this currency, if it has one.
    pub fn symbol(&self) -> Option<char> {
        CURRENCY_SYMBOLS.iter().find(|(_, code)| code == self).map(|(s, _)| *s)
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [a, b, c] if [a, b, c].iter().all(|ch| ch.is_ascii_uppercase()) => Ok(Self([*a, *b, *c])),
            _ => Err(CurrencyCodeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
