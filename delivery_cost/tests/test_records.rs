use delivery_cost::{
    load_records_csv, CostBreakdown, DeliveryFeatures, EXTRA_RATIO, FUEL_RATIO, LABOR_RATIO,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Write;

#[test]
fn ratios_cover_the_whole_total() {
    assert!((FUEL_RATIO + LABOR_RATIO + EXTRA_RATIO - 1.0).abs() < 1e-12);
}

#[rstest]
#[case(0.0)]
#[case(149.99)]
#[case(1500.0)]
#[case(98765.43)]
fn breakdown_components_sum_to_the_total(#[case] total: f64) {
    let breakdown = CostBreakdown::from_total(total);
    let sum = breakdown.fuel_cost + breakdown.labor_cost + breakdown.extra_cost;
    assert!((sum - breakdown.total_cost).abs() < 0.02);
}

#[test]
fn breakdown_applies_the_fixed_ratios() {
    let breakdown = CostBreakdown::from_total(1000.0);
    assert_eq!(breakdown.fuel_cost, 500.0);
    assert_eq!(breakdown.labor_cost, 400.0);
    assert_eq!(breakdown.extra_cost, 100.0);
    assert_eq!(breakdown.total_cost, 1000.0);
}

#[test]
fn feature_validation_rejects_negatives() {
    assert!(DeliveryFeatures::new(-1.0, 10.0, "pick_up").validate().is_err());
    assert!(DeliveryFeatures::new(1.0, -10.0, "pick_up").validate().is_err());
    assert!(DeliveryFeatures::new(f64::NAN, 10.0, "pick_up").validate().is_err());
    assert!(DeliveryFeatures::new(0.0, 0.0, "pick_up").validate().is_ok());
}

#[test]
fn csv_loader_reads_a_headered_batch() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "distance_km,weight_kg,vehicle_type,fuel_cost,labor_cost,extra_cost,total_cost"
    )
    .unwrap();
    writeln!(file, "12.5,400.0,pick_up,750.0,600.0,150.0,1500.0").unwrap();
    writeln!(file, "30.0,900.0,truk_besar,1250.0,1000.0,250.0,2500.0").unwrap();

    let records = load_records_csv(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].vehicle_type, "pick_up");
    assert_eq!(records[0].distance_km, 12.5);
    assert_eq!(records[1].total_cost, 2500.0);
}

#[test]
fn csv_loader_fails_on_a_missing_file() {
    assert!(load_records_csv("/nonexistent/records.csv").is_err());
}
