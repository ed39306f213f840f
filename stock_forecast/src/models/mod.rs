//! Forecasting models for stock series

use crate::error::{ForecastError, Result};
use crate::metrics::FitMetrics;
use crate::series::StockSeries;
use std::fmt::Debug;

/// Point forecasts with a two-sided confidence band, on the raw model scale
/// (no clamping or rounding applied)
#[derive(Debug, Clone)]
pub struct ForecastBand {
    values: Vec<f64>,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl ForecastBand {
    /// Create a new forecast band
    pub fn new(values: Vec<f64>, lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if values.len() != lower.len() || values.len() != upper.len() {
            return Err(ForecastError::FitError(format!(
                "Forecast band lengths disagree: {} values, {} lower, {} upper",
                values.len(),
                lower.len(),
                upper.len()
            )));
        }

        Ok(Self {
            values,
            lower,
            upper,
        })
    }

    /// Number of forecast steps
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the band is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Point forecasts
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Lower confidence bounds
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper confidence bounds
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }
}

/// A model that can be fitted to a prepared stock series
pub trait SeriesModel: Debug + Clone {
    /// The type of fitted model produced
    type Fitted: FittedSeriesModel;

    /// Fit the model to a prepared series
    fn fit(&self, series: &StockSeries) -> Result<Self::Fitted>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// A fitted model that can forecast future periods
pub trait FittedSeriesModel: Debug {
    /// Forecast the given number of future periods with confidence bounds
    fn forecast(&self, horizon: usize) -> Result<ForecastBand>;

    /// In-sample fit metrics
    fn metrics(&self) -> &FitMetrics;

    /// Name of the model
    fn name(&self) -> &str;
}

pub mod arima;
