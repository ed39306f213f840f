//! Stock reading series preparation for forecasting

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single historical stock reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockObservation {
    /// Calendar date of the reading
    pub date: NaiveDate,
    /// Closing stock level on that date
    pub value: f64,
}

impl StockObservation {
    /// Create a new stock observation
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A chronologically sorted, deduplicated series of stock readings.
///
/// Invariant: dates are strictly increasing. Duplicate dates in the input
/// collapse to a single entry, keeping the value supplied last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSeries {
    observations: Vec<StockObservation>,
}

impl StockSeries {
    /// Prepare a series from unordered readings: sort by date and collapse
    /// duplicate dates, last write wins. Preparing an already prepared
    /// series yields the same series.
    pub fn prepare(mut observations: Vec<StockObservation>) -> Result<Self> {
        if let Some(bad) = observations.iter().find(|o| o.value < 0.0 || !o.value.is_finite()) {
            return Err(ForecastError::ValidationError(format!(
                "Stock value must be a non-negative number, got {} on {}",
                bad.value, bad.date
            )));
        }

        // Stable sort keeps input order within a date, so the last supplied
        // value survives the collapse below.
        observations.sort_by_key(|o| o.date);

        let mut prepared: Vec<StockObservation> = Vec::with_capacity(observations.len());
        for obs in observations {
            match prepared.last_mut() {
                Some(last) if last.date == obs.date => *last = obs,
                _ => prepared.push(obs),
            }
        }

        Ok(Self {
            observations: prepared,
        })
    }

    /// Number of observations in the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The prepared observations, in date order
    pub fn observations(&self) -> &[StockObservation] {
        &self.observations
    }

    /// Stock values in date order
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Date of the most recent reading
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }
}
