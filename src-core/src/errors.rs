use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the forecasting core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Forecast operation failed: {0}")]
    Forecast(#[from] ForecastError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Unrecognized transaction date '{0}'")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Not enough data to forecast (need at least 2 days).")]
    NotEnoughData,

    #[error("Model fit failed: {0}")]
    FitFailed(String),
}
