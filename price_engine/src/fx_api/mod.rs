//! The public face of the price engine.
//!
//! * [`rates_api::RatesApi`] loads the USD rate table, serving it from a [`RateCache`](crate::traits::RateCache) while
//!   it is fresh, and otherwise fetching it from the primary source, then the fallback source.
//! * [`pricing_api::PricingApi`] combines a `RatesApi` with a [`PriceConverter`](crate::pricing::PriceConverter) to
//!   turn raw price strings into display strings, degrading gracefully when no rates can be loaded.
pub mod errors;
pub mod pricing_api;
pub mod rates_api;
