//! Gradient-boosted regression ensemble

use crate::error::{CostError, Result};
use crate::models::tree::RegressionTree;
use serde::{Deserialize, Serialize};

/// Hyper-parameters of the boosted ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GbmParams {
    /// Number of boosting rounds
    pub n_estimators: usize,
    /// Maximum depth of each tree
    pub max_depth: usize,
    /// Shrinkage applied to each tree's contribution
    pub learning_rate: f64,
    /// Minimum rows per leaf
    pub min_samples_leaf: usize,
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: 6,
            learning_rate: 0.1,
            min_samples_leaf: 1,
        }
    }
}

/// Gradient-boosted regression: sequentially fit trees on the residuals of
/// the running prediction, each contribution shrunk by the learning rate.
///
/// Split search is exact and tie-breaking fixed, so training the same batch
/// with the same parameters always yields the same ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostedRegressor {
    base_score: f64,
    learning_rate: f64,
    trees: Vec<RegressionTree>,
}

impl GradientBoostedRegressor {
    /// Fit the ensemble to feature rows and targets
    pub fn fit(rows: &[Vec<f64>], targets: &[f64], params: &GbmParams) -> Result<Self> {
        if rows.is_empty() || targets.is_empty() {
            return Err(CostError::TrainingError(
                "Cannot train on an empty batch".to_string(),
            ));
        }
        if rows.len() != targets.len() {
            return Err(CostError::TrainingError(format!(
                "Feature rows ({}) and targets ({}) disagree in length",
                rows.len(),
                targets.len()
            )));
        }
        let width = rows[0].len();
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return Err(CostError::TrainingError(
                "Feature rows must share a non-zero width".to_string(),
            ));
        }
        if targets.iter().any(|t| !t.is_finite()) {
            return Err(CostError::TrainingError(
                "Targets must be finite".to_string(),
            ));
        }

        let base_score = targets.iter().sum::<f64>() / targets.len() as f64;
        let mut predictions = vec![base_score; targets.len()];
        let mut trees = Vec::with_capacity(params.n_estimators);

        for _ in 0..params.n_estimators {
            let residuals: Vec<f64> = targets
                .iter()
                .zip(predictions.iter())
                .map(|(t, p)| t - p)
                .collect();

            let tree =
                RegressionTree::fit(rows, &residuals, params.max_depth, params.min_samples_leaf);
            for (prediction, row) in predictions.iter_mut().zip(rows) {
                *prediction += params.learning_rate * tree.predict(row);
            }
            trees.push(tree);
        }

        Ok(Self {
            base_score,
            learning_rate: params.learning_rate,
            trees,
        })
    }

    /// Predict the target for a single feature row
    pub fn predict(&self, row: &[f64]) -> f64 {
        let boosted: f64 = self.trees.iter().map(|tree| tree.predict(row)).sum();
        self.base_score + self.learning_rate * boosted
    }

    /// Number of fitted trees
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}
