//! # Stock Forecast
//!
//! A Rust library for forecasting future stock levels from historical
//! readings.
//!
//! ## Features
//!
//! - Series preparation (chronological sort, duplicate-date collapse)
//! - ARIMA model fitting with in-sample fit metrics (MAE, RMSE, AIC, BIC)
//! - Daily forecasts with 95% confidence bounds, clamped to non-negative
//!   stock levels
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use stock_forecast::{StockForecaster, StockObservation};
//!
//! # fn main() -> stock_forecast::Result<()> {
//! let observations: Vec<StockObservation> = (0..12)
//!     .map(|i| {
//!         let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(i);
//!         StockObservation::new(date, 100.0 + i as f64 * 2.0 + (i % 3) as f64)
//!     })
//!     .collect();
//!
//! let forecaster = StockForecaster::default();
//! let outcome = forecaster.run(observations, 7)?;
//!
//! assert_eq!(outcome.predictions.len(), 7);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod forecast;
pub mod metrics;
pub mod models;
pub mod series;

// Re-export commonly used types
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{
    engine_info, ForecastEngine, ForecastOutcome, ForecastPoint, StockForecaster,
    DEFAULT_ORDER, MAX_FORECAST_PERIODS, MIN_OBSERVATIONS,
};
pub use crate::metrics::FitMetrics;
pub use crate::models::arima::ArimaModel;
pub use crate::series::{StockObservation, StockSeries};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
