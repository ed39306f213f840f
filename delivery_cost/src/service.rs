//! Delivery cost service: training, prediction, and the shared model slot

use crate::encoder::CategoryEncoder;
use crate::error::{CostError, Result};
use crate::models::{GbmParams, GradientBoostedRegressor};
use crate::records::{CostBreakdown, DeliveryFeatures, DeliveryRecord};
use crate::store::{ModelStore, TrainedCostModel};
use predict_math::accuracy;
use predict_math::rounding::{round2, round_to};
use predict_math::sampling::seeded_split_indices;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

/// Minimum number of labeled records required to train
pub const MIN_TRAINING_RECORDS: usize = 50;

/// Fraction of the batch held out for evaluation
pub const TEST_FRACTION: f64 = 0.2;

/// Seed of the reproducible train/test split
pub const SPLIT_SEED: u64 = 42;

/// Constant confidence reported with every prediction. A placeholder, not a
/// computed value.
pub const CONFIDENCE_SCORE: f64 = 0.85;

/// Version string carried on batch prediction results
pub const MODEL_VERSION: &str = "1.0.0";

/// Held-out evaluation metrics from a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetrics {
    /// Mean Absolute Error on the held-out set
    pub mae: f64,
    /// Root Mean Squared Error on the held-out set
    pub rmse: f64,
    /// Coefficient of determination on the held-out set
    pub r2: f64,
}

impl std::fmt::Display for TrainingMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Training Metrics:")?;
        writeln!(f, "  MAE:  {:.2}", self.mae)?;
        writeln!(f, "  RMSE: {:.2}", self.rmse)?;
        writeln!(f, "  R2:   {:.4}", self.r2)?;
        Ok(())
    }
}

/// Outcome of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// "success" on a committed run
    pub status: String,
    /// Human-readable summary
    pub message: String,
    /// Held-out evaluation metrics
    pub metrics: TrainingMetrics,
}

/// A single cost prediction, echoing the input features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostPrediction {
    /// The features the prediction was made for
    pub features: DeliveryFeatures,
    /// Predicted cost, decomposed at the fixed ratios
    pub prediction: CostBreakdown,
    /// Confidence score in [0, 1]
    pub confidence_score: f64,
}

/// A batch of cost predictions with the serving model version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCostPrediction {
    /// One prediction per input, in input order
    pub predictions: Vec<CostPrediction>,
    /// Version of the serving model
    pub model_version: String,
}

/// Static description of the cost engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEngineInfo {
    pub model: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    /// Vehicle classes known to the currently loaded encoder, empty before
    /// the first training run
    pub vehicle_types: Vec<String>,
}

/// Delivery cost prediction service.
///
/// Owns the process-wide (model, encoder) slot. Predictions read the
/// committed pair through an `Arc` clone, so a re-train never exposes a
/// half-updated pair: training fits against working copies and takes the
/// write lock only for the final swap, after persistence succeeded.
#[derive(Debug)]
pub struct CostService {
    store: Box<dyn ModelStore>,
    params: GbmParams,
    trained: RwLock<Option<Arc<TrainedCostModel>>>,
}

impl CostService {
    /// Create a service over the given store, loading a previously
    /// persisted pair when one exists
    pub fn new(store: Box<dyn ModelStore>) -> Result<Self> {
        Self::with_params(store, GbmParams::default())
    }

    /// Create a service with explicit ensemble hyper-parameters
    pub fn with_params(store: Box<dyn ModelStore>, params: GbmParams) -> Result<Self> {
        let trained = store.load()?.map(Arc::new);
        if trained.is_some() {
            log::info!("Loaded persisted cost model and encoder");
        }
        Ok(Self {
            store,
            params,
            trained: RwLock::new(trained),
        })
    }

    /// Whether a trained model is currently available
    pub fn is_trained(&self) -> bool {
        self.trained
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Train a new model on a labeled batch and commit it.
    ///
    /// The minimum-count precondition is checked before any fitting. On any
    /// failure the previously committed pair stays in effect, in memory and
    /// on disk.
    pub fn train(&self, records: &[DeliveryRecord]) -> Result<TrainReport> {
        if records.len() < MIN_TRAINING_RECORDS {
            return Err(CostError::ValidationError(format!(
                "Minimum {} data points required for training, got {}",
                MIN_TRAINING_RECORDS,
                records.len()
            )));
        }
        let numeric_ok = |v: f64| v.is_finite() && v >= 0.0;
        if records
            .iter()
            .any(|r| !numeric_ok(r.distance_km) || !numeric_ok(r.weight_kg))
        {
            return Err(CostError::ValidationError(
                "Training records must carry non-negative distance and weight".to_string(),
            ));
        }

        let encoder = CategoryEncoder::fit(records.iter().map(|r| r.vehicle_type.as_str()));
        let rows: Vec<Vec<f64>> = records
            .iter()
            .map(|r| {
                let code = encoder.encode(&r.vehicle_type)?;
                Ok(vec![r.distance_km, r.weight_kg, code as f64])
            })
            .collect::<Result<_>>()?;
        let targets: Vec<f64> = records.iter().map(|r| r.total_cost).collect();

        let (train_idx, test_idx) = seeded_split_indices(records.len(), TEST_FRACTION, SPLIT_SEED)?;
        let train_rows: Vec<Vec<f64>> = train_idx.iter().map(|&i| rows[i].clone()).collect();
        let train_targets: Vec<f64> = train_idx.iter().map(|&i| targets[i]).collect();

        let model = GradientBoostedRegressor::fit(&train_rows, &train_targets, &self.params)?;

        let held_out: Vec<f64> = test_idx.iter().map(|&i| model.predict(&rows[i])).collect();
        let actual: Vec<f64> = test_idx.iter().map(|&i| targets[i]).collect();
        let metrics = TrainingMetrics {
            mae: round2(accuracy::mean_absolute_error(&held_out, &actual)?),
            rmse: round2(accuracy::root_mean_squared_error(&held_out, &actual)?),
            r2: round_to(accuracy::r_squared(&held_out, &actual)?, 4),
        };

        let trained = TrainedCostModel { model, encoder };
        self.store.save(&trained)?;

        let mut slot = self.trained.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(trained));
        drop(slot);

        log::info!(
            "Trained cost model on {} records: mae={}, rmse={}, r2={}",
            records.len(),
            metrics.mae,
            metrics.rmse,
            metrics.r2
        );

        Ok(TrainReport {
            status: "success".to_string(),
            message: "Model trained successfully".to_string(),
            metrics,
        })
    }

    fn current(&self) -> Result<Arc<TrainedCostModel>> {
        self.trained
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(CostError::ModelNotTrainedError)
    }

    /// Predict the cost of a single delivery
    pub fn predict(&self, features: &DeliveryFeatures) -> Result<CostPrediction> {
        features.validate()?;
        let trained = self.current()?;

        let code = trained.encoder.encode(&features.vehicle_type)?;
        let total = trained
            .model
            .predict(&[features.distance_km, features.weight_kg, code as f64]);

        Ok(CostPrediction {
            features: features.clone(),
            prediction: CostBreakdown::from_total(total),
            confidence_score: CONFIDENCE_SCORE,
        })
    }

    /// Predict costs for a batch of deliveries, in input order
    pub fn predict_batch(&self, items: &[DeliveryFeatures]) -> Result<BatchCostPrediction> {
        let predictions = items
            .iter()
            .map(|features| self.predict(features))
            .collect::<Result<Vec<_>>>()?;

        Ok(BatchCostPrediction {
            predictions,
            model_version: MODEL_VERSION.to_string(),
        })
    }

    /// Describe the cost engine and the currently known vehicle classes
    pub fn info(&self) -> CostEngineInfo {
        let vehicle_types = self
            .trained
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|t| t.encoder.classes().to_vec())
            .unwrap_or_default();

        CostEngineInfo {
            model: "GradientBoostedTrees",
            description: "Gradient boosting for delivery cost prediction",
            features: vec!["distance_km", "weight_kg", "vehicle_type"],
            vehicle_types,
        }
    }
}
