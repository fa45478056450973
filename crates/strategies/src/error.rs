use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Strategy received invalid input: {0}")]
    InvalidInput(String),

    #[error("Strategy parameters from configuration are invalid: {0}")]
    InvalidParameters(String),
}
