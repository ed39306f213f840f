//! # Supply Predict
//!
//! Workspace umbrella for the supply prediction suite: stock level
//! forecasting (`stock_forecast`) and delivery cost prediction
//! (`delivery_cost`), with shared numeric routines in `predict_math`.
//!
//! The two pipelines are independent and share no state; compose them at
//! the transport layer.

pub use delivery_cost;
pub use predict_math;
pub use stock_forecast;
