//! In-sample fit quality metrics

use serde::{Deserialize, Serialize};

/// Fit quality of a time series model, computed from one-step-ahead
/// predictions over the estimable range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Akaike Information Criterion
    pub aic: f64,
    /// Bayesian Information Criterion
    pub bic: f64,
}

impl std::fmt::Display for FitMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fit Metrics:")?;
        writeln!(f, "  MAE:  {:.4}", self.mae)?;
        writeln!(f, "  RMSE: {:.4}", self.rmse)?;
        writeln!(f, "  AIC:  {:.4}", self.aic)?;
        writeln!(f, "  BIC:  {:.4}", self.bic)?;
        Ok(())
    }
}
