use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateProviderError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("No API key has been configured for {0}")]
    MissingApiKey(String),
    #[error("Invalid REST response: {0}")]
    RestResponseError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("The provider reported a failure: {0}")]
    Unsuccessful(String),
    #[error("The provider returned an unusable rate table: {0}")]
    InvalidRates(String),
}
