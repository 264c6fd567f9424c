mod currency;
mod format;
mod rate_source;
mod rate_table;
mod secret;

pub mod helpers;

pub use currency::{CurrencyCode, CurrencyCodeError, CURRENCY_SYMBOLS};
pub use format::{group_thousands, round_half_away};
pub use rate_source::RateSource;
pub use rate_table::{RateTable, RateTableError, BASE_CURRENCY};
pub use secret::Secret;
