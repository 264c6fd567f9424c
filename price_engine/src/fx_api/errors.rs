use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RateLoadError {
    #[error("No exchange rates are available. Primary source: {primary}. Fallback source: {fallback}")]
    AllSourcesFailed { primary: String, fallback: String },
}
