//! Stock forecasting pipeline: prepare, fit, forecast

use crate::error::{ForecastError, Result};
use crate::metrics::FitMetrics;
use crate::models::arima::{ArimaModel, FittedArima};
use crate::models::{FittedSeriesModel, SeriesModel};
use crate::series::{StockObservation, StockSeries};
use chrono::{Duration, NaiveDate};
use predict_math::rounding::round2;
use serde::{Deserialize, Serialize};

/// Minimum number of distinct-dated observations required to fit
pub const MIN_OBSERVATIONS: usize = 10;

/// Maximum number of daily periods a single request may forecast
pub const MAX_FORECAST_PERIODS: usize = 365;

/// Default ARIMA structural order
pub const DEFAULT_ORDER: (usize, usize, usize) = (1, 1, 1);

/// A single forecasted stock level with its confidence bounds.
///
/// All three values are floored at zero (stock cannot be negative) and
/// rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar date of the forecast
    pub date: NaiveDate,
    /// Point estimate
    pub value: f64,
    /// Lower bound of the 95% interval
    pub lower_bound: f64,
    /// Upper bound of the 95% interval
    pub upper_bound: f64,
}

/// Result of a full forecasting run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOutcome {
    /// Identifier of the fitted model, e.g. "ARIMA(1,1,1)"
    pub model: String,
    /// Number of forecasted periods
    pub periods: usize,
    /// One entry per forecasted day, continuing from the last observation
    pub predictions: Vec<ForecastPoint>,
    /// In-sample fit quality
    pub metrics: FitMetrics,
}

impl ForecastOutcome {
    /// Serialize the outcome as a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Static description of the forecasting engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastEngineInfo {
    pub model: &'static str,
    pub description: &'static str,
    pub default_order: (usize, usize, usize),
    pub minimum_observations: usize,
    pub max_forecast_periods: usize,
}

/// Describe the forecasting engine and its request limits
pub fn engine_info() -> ForecastEngineInfo {
    ForecastEngineInfo {
        model: "ARIMA",
        description: "AutoRegressive Integrated Moving Average for time series forecasting",
        default_order: DEFAULT_ORDER,
        minimum_observations: MIN_OBSERVATIONS,
        max_forecast_periods: MAX_FORECAST_PERIODS,
    }
}

/// A request-scoped forecasting engine: fit once, then forecast.
///
/// Holds the fitted model and the date of the last observation so forecasted
/// points can be stamped with the days that follow it.
#[derive(Debug)]
pub struct ForecastEngine {
    model: ArimaModel,
    fitted: Option<(FittedArima, NaiveDate)>,
}

impl ForecastEngine {
    /// Create an engine with the given ARIMA order
    pub fn new(order: (usize, usize, usize)) -> Self {
        Self {
            model: ArimaModel::new(order.0, order.1, order.2),
            fitted: None,
        }
    }

    /// Fit the model to a prepared series, returning the fit metrics
    pub fn fit(&mut self, series: &StockSeries) -> Result<FitMetrics> {
        let last_date = series.last_date().ok_or_else(|| {
            ForecastError::ValidationError("Cannot fit an empty series".to_string())
        })?;

        let fitted = self.model.fit(series)?;
        let metrics = fitted.metrics().clone();
        self.fitted = Some((fitted, last_date));
        Ok(metrics)
    }

    /// Forecast the given number of daily periods.
    ///
    /// Fails with [`ForecastError::NotFittedError`] when called before
    /// [`ForecastEngine::fit`].
    pub fn forecast(&self, periods: usize) -> Result<Vec<ForecastPoint>> {
        let (fitted, last_date) = self.fitted.as_ref().ok_or(ForecastError::NotFittedError)?;

        let band = fitted.forecast(periods)?;
        let points = (0..periods)
            .map(|i| ForecastPoint {
                date: *last_date + Duration::days(i as i64 + 1),
                value: round2(band.values()[i].max(0.0)),
                lower_bound: round2(band.lower()[i].max(0.0)),
                upper_bound: round2(band.upper()[i].max(0.0)),
            })
            .collect();

        Ok(points)
    }

    /// Name of the underlying model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}

/// Forecasting pipeline entry point.
///
/// One instance serves one request: the fitted model is discarded with the
/// engine, so no state leaks across requests.
#[derive(Debug, Clone)]
pub struct StockForecaster {
    order: (usize, usize, usize),
}

impl Default for StockForecaster {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER)
    }
}

impl StockForecaster {
    /// Create a forecaster with the given ARIMA order
    pub fn new(order: (usize, usize, usize)) -> Self {
        Self { order }
    }

    /// Run the full pipeline: validate, prepare the series, fit, forecast.
    pub fn run(
        &self,
        observations: Vec<StockObservation>,
        periods: usize,
    ) -> Result<ForecastOutcome> {
        if periods < 1 || periods > MAX_FORECAST_PERIODS {
            return Err(ForecastError::ValidationError(format!(
                "Periods must be between 1 and {}, got {}",
                MAX_FORECAST_PERIODS, periods
            )));
        }

        let series = StockSeries::prepare(observations)?;
        if series.len() < MIN_OBSERVATIONS {
            return Err(ForecastError::ValidationError(format!(
                "Minimum {} data points required for forecasting, got {}",
                MIN_OBSERVATIONS,
                series.len()
            )));
        }

        let mut engine = ForecastEngine::new(self.order);
        let metrics = engine.fit(&series)?;
        let predictions = engine.forecast(periods)?;

        log::info!(
            "{} forecast: {} observations, {} periods, mae={}, rmse={}",
            engine.model_name(),
            series.len(),
            periods,
            metrics.mae,
            metrics.rmse
        );

        Ok(ForecastOutcome {
            model: engine.model_name().to_string(),
            periods,
            predictions,
            metrics,
        })
    }
}
