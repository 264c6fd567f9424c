//! Clients for the exchange-rate providers.
//!
//! Two providers are supported, and both quote rates against USD:
//! * [`ExchangeRateApi`] is the primary, keyed provider. Its response carries an explicit `result` status.
//! * [`OpenRatesApi`] is the keyless fallback. Its response is a bare `rates` map, which is schema-checked before use.
//!
//! Both implement [`fx_common::RateSource`], so the price engine can use either one (or a mock) interchangeably.
mod api;
mod config;
mod data_objects;
mod error;
mod fallback;
mod primary;

pub use config::RateProviderConfig;
pub use data_objects::{LatestRatesResponse, OpenRatesResponse};
pub use error::RateProviderError;
pub use fallback::OpenRatesApi;
pub use primary::ExchangeRateApi;
