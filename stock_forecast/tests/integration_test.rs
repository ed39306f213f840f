use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use stock_forecast::{
    engine_info, ForecastError, StockForecaster, StockObservation, MAX_FORECAST_PERIODS,
    MIN_OBSERVATIONS,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// Ten daily readings, monotonically increasing with an uneven step
fn rising_stock(n: usize) -> Vec<StockObservation> {
    let steps = [3.0, 5.0, 2.0, 6.0];
    let mut value = 120.0;
    (0..n)
        .map(|i| {
            value += steps[i % 4];
            StockObservation::new(start_date() + Duration::days(i as i64), value)
        })
        .collect()
}

#[test]
fn seven_day_forecast_continues_the_date_sequence() {
    init_logging();
    let observations = rising_stock(10);
    let outcome = StockForecaster::default().run(observations, 7).unwrap();

    assert_eq!(outcome.model, "ARIMA(1,1,1)");
    assert_eq!(outcome.periods, 7);
    assert_eq!(outcome.predictions.len(), 7);

    // Dates strictly continue the input's daily cadence with no gaps.
    let last_observed = start_date() + Duration::days(9);
    for (i, point) in outcome.predictions.iter().enumerate() {
        assert_eq!(point.date, last_observed + Duration::days(i as i64 + 1));
    }
}

#[test]
fn forecast_bounds_are_ordered_and_non_negative() {
    let observations = rising_stock(14);
    let outcome = StockForecaster::default().run(observations, 30).unwrap();

    for point in &outcome.predictions {
        assert!(point.lower_bound <= point.value);
        assert!(point.value <= point.upper_bound);
        assert!(point.lower_bound >= 0.0);
    }
}

#[test]
fn fit_metrics_are_reported() {
    let observations = rising_stock(12);
    let outcome = StockForecaster::default().run(observations, 5).unwrap();

    assert!(outcome.metrics.mae >= 0.0);
    assert!(outcome.metrics.rmse >= outcome.metrics.mae);
    assert!(outcome.metrics.aic.is_finite());
    assert!(outcome.metrics.bic.is_finite());
}

#[test]
fn fewer_than_minimum_observations_is_rejected() {
    let observations = rising_stock(MIN_OBSERVATIONS - 1);
    let result = StockForecaster::default().run(observations, 7);
    assert!(matches!(result, Err(ForecastError::ValidationError(_))));
}

#[test]
fn duplicate_dates_count_once_toward_the_minimum() {
    // Ten readings but only nine distinct dates: below the minimum.
    let mut observations = rising_stock(9);
    observations.push(StockObservation::new(
        start_date() + Duration::days(4),
        140.0,
    ));

    let result = StockForecaster::default().run(observations, 7);
    assert!(matches!(result, Err(ForecastError::ValidationError(_))));
}

#[test]
fn period_bounds_are_enforced() {
    let observations = rising_stock(12);

    let result = StockForecaster::default().run(observations.clone(), 0);
    assert!(matches!(result, Err(ForecastError::ValidationError(_))));

    let result = StockForecaster::default().run(observations, MAX_FORECAST_PERIODS + 1);
    assert!(matches!(result, Err(ForecastError::ValidationError(_))));
}

#[test]
fn outcome_serializes_to_json() {
    let observations = rising_stock(10);
    let outcome = StockForecaster::default().run(observations, 3).unwrap();

    let json = outcome.to_json().unwrap();
    assert!(json.contains("\"ARIMA(1,1,1)\""));
    assert!(json.contains("lower_bound"));
}

#[test]
fn engine_info_describes_the_limits() {
    let info = engine_info();
    assert_eq!(info.model, "ARIMA");
    assert_eq!(info.minimum_observations, MIN_OBSERVATIONS);
    assert_eq!(info.max_forecast_periods, MAX_FORECAST_PERIODS);
}
