use delivery_cost::{
    CategoryEncoder, FileModelStore, GbmParams, GradientBoostedRegressor, MemoryModelStore,
    ModelStore, TrainedCostModel,
};
use pretty_assertions::assert_eq;

fn small_trained_pair(offset: f64) -> TrainedCostModel {
    let rows: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, 1.0, 0.0]).collect();
    let targets: Vec<f64> = (0..10).map(|i| offset + 10.0 * i as f64).collect();
    let model = GradientBoostedRegressor::fit(&rows, &targets, &GbmParams::default()).unwrap();
    let encoder = CategoryEncoder::fit(["pick_up", "truk_sedang"]);
    TrainedCostModel { model, encoder }
}

#[test]
fn file_store_round_trips_the_pair() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileModelStore::new(dir.path());
    let trained = small_trained_pair(100.0);

    store.save(&trained).unwrap();
    let loaded = store.load().unwrap().unwrap();

    assert_eq!(loaded, trained);
    let row = [4.0, 1.0, 0.0];
    assert_eq!(loaded.model.predict(&row), trained.model.predict(&row));
}

#[test]
fn empty_directory_loads_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileModelStore::new(dir.path());

    assert!(store.load().unwrap().is_none());
}

#[test]
fn a_lone_artifact_is_not_a_pair() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileModelStore::new(dir.path());
    store.save(&small_trained_pair(100.0)).unwrap();

    std::fs::remove_file(dir.path().join("category_encoder.json")).unwrap();

    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_replaces_the_previous_pair() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileModelStore::new(dir.path());

    let first = small_trained_pair(100.0);
    let second = small_trained_pair(5000.0);
    store.save(&first).unwrap();
    store.save(&second).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, second);
}

#[test]
fn memory_store_round_trips_the_pair() {
    let store = MemoryModelStore::new();
    assert!(store.load().unwrap().is_none());

    let trained = small_trained_pair(100.0);
    store.save(&trained).unwrap();

    assert_eq!(store.load().unwrap().unwrap(), trained);
}
