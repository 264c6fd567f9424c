//! Helpers for exercising the price engine without touching the network.
pub mod prepare_env;
pub mod scripted_source;

#[cfg(test)]
pub mod mocks;

pub use scripted_source::ScriptedRateSource;
