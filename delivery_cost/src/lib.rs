//! # Delivery Cost
//!
//! A Rust library for predicting delivery costs with a gradient-boosted
//! regression ensemble.
//!
//! ## Features
//!
//! - Training on labeled delivery history with a reproducible held-out
//!   split and MAE/RMSE/R2 evaluation
//! - Categorical vehicle-type encoding, always persisted together with the
//!   model it was trained against
//! - Cost prediction with a fixed-ratio fuel/labor/extra breakdown
//! - Durable single-slot model storage that survives process restarts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use delivery_cost::{CostService, DeliveryFeatures, FileModelStore};
//!
//! # fn main() -> delivery_cost::Result<()> {
//! # let records = Vec::new();
//! let store = FileModelStore::new("models");
//! let service = CostService::new(Box::new(store))?;
//!
//! let report = service.train(&records)?;
//! println!("{}", report.metrics);
//!
//! let features = DeliveryFeatures::new(12.0, 450.0, "pick_up");
//! let prediction = service.predict(&features)?;
//! println!("total: {}", prediction.prediction.total_cost);
//! # Ok(())
//! # }
//! ```

pub mod encoder;
pub mod error;
pub mod models;
pub mod records;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use crate::encoder::CategoryEncoder;
pub use crate::error::{CostError, Result};
pub use crate::models::{GbmParams, GradientBoostedRegressor};
pub use crate::records::{
    load_records_csv, CostBreakdown, DeliveryFeatures, DeliveryRecord, EXTRA_RATIO, FUEL_RATIO,
    LABOR_RATIO,
};
pub use crate::service::{
    BatchCostPrediction, CostEngineInfo, CostPrediction, CostService, TrainReport,
    TrainingMetrics, CONFIDENCE_SCORE, MIN_TRAINING_RECORDS, MODEL_VERSION,
};
pub use crate::store::{FileModelStore, MemoryModelStore, ModelStore, TrainedCostModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
