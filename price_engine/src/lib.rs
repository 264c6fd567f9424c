//! FX Price Engine
//!
//! Displays supplier prices for hotels and flights in the agency's local currency, with the agency's markup applied.
//!
//! The library is divided into three main sections:
//! 1. Pricing ([`mod@pricing`]). Parses free-form price strings such as `"USD 1,234.50"` or `"€99"`, applies the
//!    markup for the product type and converts the result into the target currency. This part is pure and never fails;
//!    when a rate is missing the result degrades to a [`PriceDisplay`] variant that says so.
//! 2. Rate caching ([`mod@cache`] and [`mod@traits`]). The USD-based rate table is kept behind the [`RateCache`] trait,
//!    either on disk ([`FileRateCache`]) or in memory ([`MemoryRateCache`]), and is reused until it goes stale.
//! 3. The public API ([`RatesApi`] and [`PricingApi`]). These tie the cache to a primary and a fallback
//!    [`RateSource`](fx_common::RateSource), fetching a new table only when the cached one is missing or stale.
pub mod cache;
pub mod config;
mod fx_api;
pub mod pricing;
pub mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use cache::{FileRateCache, MemoryRateCache, DEFAULT_RATES_TTL};
pub use config::EngineConfig;
pub use fx_api::{
    errors::RateLoadError,
    pricing_api::{PricedBatch, PricingApi},
    rates_api::RatesApi,
};
pub use pricing::{parse_price, MarkupPolicy, ParsedPrice, PriceConverter, PriceDisplay, PriceParseError, FLIGHT, HOTEL};
pub use traits::{CacheEntry, RateCache, RateCacheError};
