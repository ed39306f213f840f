//! Delivery record and cost types

use crate::error::{CostError, Result};
use predict_math::rounding::round2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Share of the predicted total attributed to fuel
pub const FUEL_RATIO: f64 = 0.5;
/// Share of the predicted total attributed to labor
pub const LABOR_RATIO: f64 = 0.4;
/// Share of the predicted total attributed to extras
pub const EXTRA_RATIO: f64 = 0.1;

/// A labeled historical delivery used for training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Delivery distance in km
    pub distance_km: f64,
    /// Shipped weight in kg
    pub weight_kg: f64,
    /// Vehicle class used for the delivery
    pub vehicle_type: String,
    /// Fuel cost component
    pub fuel_cost: f64,
    /// Labor cost component
    pub labor_cost: f64,
    /// Extra cost component
    pub extra_cost: f64,
    /// Total delivery cost, the training target
    pub total_cost: f64,
}

/// Features describing a delivery whose cost is to be predicted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryFeatures {
    /// Delivery distance in km
    pub distance_km: f64,
    /// Shipped weight in kg
    pub weight_kg: f64,
    /// Vehicle class, must belong to the trained vocabulary
    pub vehicle_type: String,
}

impl DeliveryFeatures {
    /// Create new delivery features
    pub fn new(distance_km: f64, weight_kg: f64, vehicle_type: impl Into<String>) -> Self {
        Self {
            distance_km,
            weight_kg,
            vehicle_type: vehicle_type.into(),
        }
    }

    /// Check that the numeric features are non-negative finite values
    pub fn validate(&self) -> Result<()> {
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(CostError::ValidationError(format!(
                "Distance must be a non-negative number, got {}",
                self.distance_km
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg < 0.0 {
            return Err(CostError::ValidationError(format!(
                "Weight must be a non-negative number, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

/// A predicted cost, decomposed into fixed shares of the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Fuel cost component
    pub fuel_cost: f64,
    /// Labor cost component
    pub labor_cost: f64,
    /// Extra cost component
    pub extra_cost: f64,
    /// Predicted total cost
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Decompose a predicted total into sub-costs at the fixed ratios,
    /// rounding each component to two decimal places
    pub fn from_total(total: f64) -> Self {
        Self {
            fuel_cost: round2(total * FUEL_RATIO),
            labor_cost: round2(total * LABOR_RATIO),
            extra_cost: round2(total * EXTRA_RATIO),
            total_cost: round2(total),
        }
    }
}

/// Load a batch of delivery records from a headered CSV file
pub fn load_records_csv<P: AsRef<Path>>(path: P) -> Result<Vec<DeliveryRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
