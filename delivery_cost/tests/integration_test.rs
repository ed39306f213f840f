use delivery_cost::{
    CostError, CostService, DeliveryFeatures, DeliveryRecord, FileModelStore, MemoryModelStore,
    CONFIDENCE_SCORE, MIN_TRAINING_RECORDS, MODEL_VERSION,
};
use pretty_assertions::assert_eq;

const VEHICLES: [&str; 3] = ["pick_up", "truk_sedang", "truk_besar"];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Synthetic history where the total cost follows the distance linearly:
/// total = 1000 + 50 * distance_km
fn linear_history(n: usize) -> Vec<DeliveryRecord> {
    (0..n)
        .map(|i| {
            let distance = (i + 1) as f64;
            let total = 1000.0 + 50.0 * distance;
            DeliveryRecord {
                distance_km: distance,
                weight_kg: ((i * 37) % 500) as f64 + 50.0,
                vehicle_type: VEHICLES[i % 3].to_string(),
                fuel_cost: total * 0.5,
                labor_cost: total * 0.4,
                extra_cost: total * 0.1,
                total_cost: total,
            }
        })
        .collect()
}

fn trained_service() -> CostService {
    init_logging();
    let service = CostService::new(Box::new(MemoryModelStore::new())).unwrap();
    service.train(&linear_history(MIN_TRAINING_RECORDS)).unwrap();
    service
}

#[test]
fn training_reports_success_and_strong_fit() {
    let service = CostService::new(Box::new(MemoryModelStore::new())).unwrap();
    let report = service.train(&linear_history(MIN_TRAINING_RECORDS)).unwrap();

    assert_eq!(report.status, "success");
    assert_eq!(report.message, "Model trained successfully");
    assert!(report.metrics.mae >= 0.0);
    assert!(report.metrics.rmse >= report.metrics.mae);
    assert!(report.metrics.r2 > 0.8);
}

#[test]
fn prediction_tracks_the_linear_trend() {
    let service = trained_service();

    let features = DeliveryFeatures::new(10.0, 100.0, "pick_up");
    let prediction = service.predict(&features).unwrap();

    // total = 1000 + 50 * 10 = 1500 on the training trend
    assert!((prediction.prediction.total_cost - 1500.0).abs() < 150.0);
    assert_eq!(prediction.features, features);
    assert_eq!(prediction.confidence_score, CONFIDENCE_SCORE);
}

#[test]
fn breakdown_sums_to_the_predicted_total() {
    let service = trained_service();

    for distance in [2.0, 17.0, 43.0] {
        let prediction = service
            .predict(&DeliveryFeatures::new(distance, 200.0, "truk_sedang"))
            .unwrap();
        let b = &prediction.prediction;
        assert!((b.fuel_cost + b.labor_cost + b.extra_cost - b.total_cost).abs() < 0.02);
    }
}

#[test]
fn training_is_deterministic_for_a_fixed_seed() {
    let records = linear_history(60);

    let first = CostService::new(Box::new(MemoryModelStore::new()))
        .unwrap()
        .train(&records)
        .unwrap();
    let second = CostService::new(Box::new(MemoryModelStore::new()))
        .unwrap()
        .train(&records)
        .unwrap();

    assert_eq!(first.metrics, second.metrics);
}

#[test]
fn undersized_batch_is_rejected_before_fitting() {
    let service = CostService::new(Box::new(MemoryModelStore::new())).unwrap();
    let result = service.train(&linear_history(MIN_TRAINING_RECORDS - 1));

    assert!(matches!(result, Err(CostError::ValidationError(_))));
    // Nothing was committed: prediction is still unavailable.
    assert!(!service.is_trained());
}

#[test]
fn unknown_vehicle_type_is_an_error() {
    let service = trained_service();
    let result = service.predict(&DeliveryFeatures::new(10.0, 100.0, "gerobak"));

    assert!(matches!(result, Err(CostError::UnknownCategoryError(_))));
}

#[test]
fn prediction_before_training_is_unavailable() {
    let service = CostService::new(Box::new(MemoryModelStore::new())).unwrap();
    let result = service.predict(&DeliveryFeatures::new(10.0, 100.0, "pick_up"));

    assert!(matches!(result, Err(CostError::ModelNotTrainedError)));
}

#[test]
fn batch_prediction_preserves_order_and_carries_the_version() {
    let service = trained_service();
    let items = vec![
        DeliveryFeatures::new(5.0, 100.0, "pick_up"),
        DeliveryFeatures::new(25.0, 300.0, "truk_besar"),
    ];

    let batch = service.predict_batch(&items).unwrap();

    assert_eq!(batch.model_version, MODEL_VERSION);
    assert_eq!(batch.predictions.len(), 2);
    assert_eq!(batch.predictions[0].features, items[0]);
    assert_eq!(batch.predictions[1].features, items[1]);
    assert!(
        batch.predictions[1].prediction.total_cost > batch.predictions[0].prediction.total_cost
    );
}

#[test]
fn trained_pair_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let features = DeliveryFeatures::new(10.0, 100.0, "pick_up");

    let first_prediction = {
        let service = CostService::new(Box::new(FileModelStore::new(dir.path()))).unwrap();
        service.train(&linear_history(MIN_TRAINING_RECORDS)).unwrap();
        service.predict(&features).unwrap()
    };

    // A fresh service over the same store predicts without retraining.
    let service = CostService::new(Box::new(FileModelStore::new(dir.path()))).unwrap();
    assert!(service.is_trained());

    let second_prediction = service.predict(&features).unwrap();
    assert_eq!(second_prediction, first_prediction);
}

#[test]
fn info_lists_the_trained_vocabulary() {
    let service = CostService::new(Box::new(MemoryModelStore::new())).unwrap();
    assert!(service.info().vehicle_types.is_empty());

    service.train(&linear_history(MIN_TRAINING_RECORDS)).unwrap();

    let info = service.info();
    assert_eq!(info.model, "GradientBoostedTrees");
    assert_eq!(info.vehicle_types, VEHICLES);
}
