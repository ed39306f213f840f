//! Error types for the delivery_cost crate

use thiserror::Error;

/// Custom error types for the delivery_cost crate
#[derive(Debug, Error)]
pub enum CostError {
    /// Error related to data validation or insufficient input
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Prediction was requested before any model was trained
    #[error("Model not trained. Train the model first.")]
    ModelNotTrainedError,

    /// A categorical value outside the trained vocabulary
    #[error("Unknown category: {0}")]
    UnknownCategoryError(String),

    /// The training procedure failed or the data was degenerate
    #[error("Training error: {0}")]
    TrainingError(String),

    /// Error from the model store
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from serializing artifacts
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from mathematical operations
    #[error("Math error: {0}")]
    MathError(#[from] predict_math::MathError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, CostError>;

impl From<csv::Error> for CostError {
    fn from(err: csv::Error) -> Self {
        CostError::CsvError(err.to_string())
    }
}
