//! Categorical encoding for vehicle types

use crate::error::{CostError, Result};
use serde::{Deserialize, Serialize};

/// Maps a small string vocabulary to dense integer codes.
///
/// Codes are assigned in first-seen order during fitting, so they are
/// deterministic for a fixed batch but not guaranteed stable across
/// re-trainings. An encoder must always be used with the model that was
/// trained against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryEncoder {
    classes: Vec<String>,
}

impl CategoryEncoder {
    /// Fit the encoder over observed values, keeping each distinct value
    /// once in first-seen order
    pub fn fit<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes: Vec<String> = Vec::new();
        for value in values {
            if !classes.iter().any(|c| c == value) {
                classes.push(value.to_string());
            }
        }
        Self { classes }
    }

    /// Map a known value to its integer code.
    ///
    /// Fails with [`CostError::UnknownCategoryError`] for anything outside
    /// the fitted vocabulary, never a silent default.
    pub fn encode(&self, value: &str) -> Result<usize> {
        self.classes
            .iter()
            .position(|c| c == value)
            .ok_or_else(|| CostError::UnknownCategoryError(value.to_string()))
    }

    /// The fitted vocabulary, in code order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of known categories
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the encoder has been fitted over any values
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
