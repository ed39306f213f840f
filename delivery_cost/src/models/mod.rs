//! Regression models for delivery cost prediction

pub mod gbm;
pub mod tree;

pub use gbm::{GbmParams, GradientBoostedRegressor};
pub use tree::RegressionTree;
