//! Error types for the stock_forecast crate

use thiserror::Error;

/// Custom error types for the stock_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or insufficient input
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Forecast was requested before the model was fitted
    #[error("Model must be fitted before forecasting")]
    NotFittedError,

    /// The numerical fitting procedure failed or the data was degenerate
    #[error("Fit error: {0}")]
    FitError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from mathematical operations
    #[error("Math error: {0}")]
    MathError(#[from] predict_math::MathError),

    /// Error from serializing results
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
