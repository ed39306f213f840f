//! Durable storage for the trained (model, encoder) pair

use crate::encoder::CategoryEncoder;
use crate::error::{CostError, Result};
use crate::models::GradientBoostedRegressor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The trained regression model together with the categorical vocabulary
/// mapping in effect when it was trained. The two are only ever stored and
/// loaded as one unit, so vocabulary and model cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedCostModel {
    /// The fitted regression ensemble
    pub model: GradientBoostedRegressor,
    /// The encoder the ensemble was trained against
    pub encoder: CategoryEncoder,
}

/// Durable slot for the latest trained pair.
///
/// Implementations decide the artifact format; the training and prediction
/// logic only sees this interface.
pub trait ModelStore: Send + Sync + std::fmt::Debug {
    /// Load the previously persisted pair, if any
    fn load(&self) -> Result<Option<TrainedCostModel>>;

    /// Persist a new pair, replacing the previous one as a unit
    fn save(&self, trained: &TrainedCostModel) -> Result<()>;
}

const MODEL_FILE: &str = "cost_model.json";
const ENCODER_FILE: &str = "category_encoder.json";

/// File-backed store: exactly two JSON artifacts in one directory, written
/// through temp files and renamed so readers never see a partial artifact.
#[derive(Debug, Clone)]
pub struct FileModelStore {
    dir: PathBuf,
}

impl FileModelStore {
    /// Create a store rooted at the given directory
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    fn encoder_path(&self) -> PathBuf {
        self.dir.join(ENCODER_FILE)
    }

    fn write_artifact(&self, path: &Path, contents: &str) -> Result<()> {
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl ModelStore for FileModelStore {
    fn load(&self) -> Result<Option<TrainedCostModel>> {
        let model_path = self.model_path();
        let encoder_path = self.encoder_path();
        if !model_path.exists() || !encoder_path.exists() {
            return Ok(None);
        }

        let model = serde_json::from_str(&fs::read_to_string(model_path)?)?;
        let encoder = serde_json::from_str(&fs::read_to_string(encoder_path)?)?;
        Ok(Some(TrainedCostModel { model, encoder }))
    }

    fn save(&self, trained: &TrainedCostModel) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let model_json = serde_json::to_string(&trained.model)?;
        let encoder_json = serde_json::to_string(&trained.encoder)?;

        self.write_artifact(&self.model_path(), &model_json)?;
        self.write_artifact(&self.encoder_path(), &encoder_json)?;

        log::info!("Persisted model and encoder pair to {}", self.dir.display());
        Ok(())
    }
}

/// In-memory store for tests and ephemeral deployments
#[derive(Debug, Default)]
pub struct MemoryModelStore {
    slot: Mutex<Option<TrainedCostModel>>,
}

impl MemoryModelStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModelStore for MemoryModelStore {
    fn load(&self) -> Result<Option<TrainedCostModel>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| CostError::StorageError("Store lock poisoned".to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, trained: &TrainedCostModel) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| CostError::StorageError("Store lock poisoned".to_string()))?;
        *slot = Some(trained.clone());
        Ok(())
    }
}
