//! # Predict Math
//!
//! Shared numeric routines for the supply prediction pipelines:
//! forecast/regression accuracy metrics, reproducible sampling, and
//! presentation rounding.

use thiserror::Error;

pub mod accuracy;
pub mod rounding;
pub mod sampling;

/// Errors that can occur in prediction-related calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for prediction math operations
pub type Result<T> = std::result::Result<T, MathError>;
