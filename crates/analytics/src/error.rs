use strategies::StrategyError;
use thiserror::Error;

/// The two failure kinds an analysis can produce. Both are fatal for the
/// invocation; no partial statistics are ever returned alongside them.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid input for sales analysis: {0}")]
    InvalidInput(String),

    #[error("Required capability is missing from the analysis options: {0}")]
    MissingCapability(String),
}

// Strategy-level constraint violations surface as invalid input.
impl From<StrategyError> for AnalyticsError {
    fn from(err: StrategyError) -> Self {
        match err {
            StrategyError::InvalidInput(msg) => AnalyticsError::InvalidInput(msg),
            StrategyError::InvalidParameters(msg) => AnalyticsError::InvalidInput(msg),
        }
    }
}
