use crate::RateTable;

/// A remote provider of USD-based exchange rates.
#[allow(async_fn_in_trait)]
pub trait RateSource {
    type Error: std::error::Error;

    /// A short, human-readable label used in log messages.
    fn name(&self) -> &str {
        "rate source"
    }

    /// Fetch the latest rate table. One attempt only; retrying is up to the caller.
    async fn fetch_latest(&self) -> Result<RateTable, Self::Error>;
}
