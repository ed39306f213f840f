//! ARIMA models for stock series forecasting

use crate::error::{ForecastError, Result};
use crate::metrics::FitMetrics;
use crate::models::{FittedSeriesModel, ForecastBand, SeriesModel};
use crate::series::StockSeries;
use predict_math::accuracy;
use predict_math::rounding::round2;
use statrs::distribution::{ContinuousCDF, Normal};

/// Significance level of the two-sided forecast interval (95% band)
pub const CONFIDENCE_ALPHA: f64 = 0.05;

const DEGENERATE_EPS: f64 = 1e-10;

/// ARIMA model (AutoRegressive Integrated Moving Average)
#[derive(Debug, Clone)]
pub struct ArimaModel {
    /// Name of the model
    name: String,
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
}

/// Fitted ARIMA model, produced by [`ArimaModel::fit`]
#[derive(Debug, Clone)]
pub struct FittedArima {
    /// Name of the model
    name: String,
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    /// Fitted AR coefficients
    ar: Vec<f64>,
    /// Fitted MA coefficients
    ma: Vec<f64>,
    /// Mean of the differenced series
    mean: f64,
    /// Residual variance on the differenced scale
    sigma2: f64,
    /// Centered differenced series
    z: Vec<f64>,
    /// Residuals from fitting
    residuals: Vec<f64>,
    /// Last value of each differencing level 0..d, for forecast integration
    level_tails: Vec<f64>,
    /// In-sample fit metrics
    metrics: FitMetrics,
}

impl ArimaModel {
    /// Create a new ARIMA model with the given structural order
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self {
            name: format!("ARIMA({},{},{})", p, d, q),
            p,
            d,
            q,
        }
    }

    /// The structural order (p, d, q)
    pub fn order(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }
}

/// Apply d-th order differencing
fn difference(values: &[f64], d: usize) -> Vec<f64> {
    let mut out = values.to_vec();
    for _ in 0..d {
        out = out.windows(2).map(|w| w[1] - w[0]).collect();
    }
    out
}

fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn variance_of(values: &[f64]) -> f64 {
    let mean = mean_of(values);
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

fn binomial(n: usize, k: usize) -> f64 {
    let mut value = 1.0;
    for i in 0..k {
        value = value * (n - i) as f64 / (i + 1) as f64;
    }
    value
}

/// Solve a linear system by Gaussian elimination with partial pivoting
fn solve_linear(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| {
                a[i][col]
                    .abs()
                    .partial_cmp(&a[j][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok_or_else(|| ForecastError::FitError("Empty linear system".to_string()))?;

        if a[pivot][col].abs() < DEGENERATE_EPS {
            return Err(ForecastError::FitError(
                "Singular system while estimating coefficients".to_string(),
            ));
        }

        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut value = b[row];
        for col in (row + 1)..n {
            value -= a[row][col] * x[col];
        }
        x[row] = value / a[row][row];
    }

    Ok(x)
}

/// Ordinary least squares via the normal equations
fn ols(rows: &[Vec<f64>], targets: &[f64]) -> Result<Vec<f64>> {
    let k = rows.first().map(Vec::len).unwrap_or(0);
    if k == 0 {
        return Ok(Vec::new());
    }

    let mut xtx = vec![vec![0.0; k]; k];
    let mut xty = vec![0.0; k];
    for (row, &target) in rows.iter().zip(targets) {
        for i in 0..k {
            xty[i] += row[i] * target;
            for j in 0..k {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }

    solve_linear(xtx, xty)
}

/// Estimate AR and MA coefficients on the centered differenced series using
/// conditional least squares in the Hannan-Rissanen style: a long AR fit
/// supplies residual proxies, then one regression over AR and MA lags.
fn estimate_coefficients(z: &[f64], p: usize, q: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    if p == 0 && q == 0 {
        return Ok((Vec::new(), Vec::new()));
    }

    let n = z.len();
    let mut shocks = vec![0.0; n];

    let long_order = (p + q + 1).min(n.saturating_sub(1) / 2);
    if q > 0 && long_order > 0 {
        let rows: Vec<Vec<f64>> = (long_order..n)
            .map(|t| (0..long_order).map(|i| z[t - 1 - i]).collect())
            .collect();
        let targets: Vec<f64> = (long_order..n).map(|t| z[t]).collect();
        let long_ar = ols(&rows, &targets)?;
        for t in long_order..n {
            let mut pred = 0.0;
            for (i, &phi) in long_ar.iter().enumerate() {
                pred += phi * z[t - 1 - i];
            }
            shocks[t] = z[t] - pred;
        }
    }

    let start = if q > 0 { p.max(long_order + q) } else { p };
    if n.saturating_sub(start) < p + q + 1 {
        return Err(ForecastError::FitError(format!(
            "Insufficient data to estimate {} AR and {} MA coefficients",
            p, q
        )));
    }

    let rows: Vec<Vec<f64>> = (start..n)
        .map(|t| {
            let mut row = Vec::with_capacity(p + q);
            for i in 0..p {
                row.push(z[t - 1 - i]);
            }
            for j in 0..q {
                row.push(shocks[t - 1 - j]);
            }
            row
        })
        .collect();
    let targets: Vec<f64> = (start..n).map(|t| z[t]).collect();
    let coefficients = ols(&rows, &targets)?;

    let (ar, ma) = coefficients.split_at(p);
    Ok((ar.to_vec(), ma.to_vec()))
}

impl SeriesModel for ArimaModel {
    type Fitted = FittedArima;

    fn fit(&self, series: &StockSeries) -> Result<FittedArima> {
        let y = series.values();
        let min_len = self.p + self.d + self.q + 1;
        if y.len() < min_len {
            return Err(ForecastError::FitError(format!(
                "Insufficient data for {}. Need at least {} observations.",
                self.name, min_len
            )));
        }

        let w = difference(&y, self.d);
        let mean = mean_of(&w);
        let z: Vec<f64> = w.iter().map(|v| v - mean).collect();

        if variance_of(&z) < DEGENERATE_EPS {
            return Err(ForecastError::FitError(
                "Series is constant or degenerate after differencing".to_string(),
            ));
        }

        let (ar, ma) = estimate_coefficients(&z, self.p, self.q)?;

        // One-step-ahead predictions and residuals on the centered scale,
        // with pre-sample shocks fixed at zero.
        let mut residuals = vec![0.0; z.len()];
        let mut preds = vec![0.0; z.len()];
        for t in 0..z.len() {
            let mut pred = 0.0;
            for (i, &phi) in ar.iter().enumerate() {
                if t > i {
                    pred += phi * z[t - 1 - i];
                }
            }
            for (j, &theta) in ma.iter().enumerate() {
                if t > j {
                    pred += theta * residuals[t - 1 - j];
                }
            }
            preds[t] = pred;
            residuals[t] = z[t] - pred;
        }

        let n = z.len() as f64;
        let sigma2 = residuals.iter().map(|e| e * e).sum::<f64>() / n;
        if !sigma2.is_finite() || sigma2 < DEGENERATE_EPS {
            return Err(ForecastError::FitError(
                "Residual variance collapsed during fitting".to_string(),
            ));
        }

        // Undifference the one-step predictions against the actual history
        // to score them on the original scale.
        let mut fitted = Vec::with_capacity(z.len());
        for t in 0..z.len() {
            let mut value = mean + preds[t];
            let yi = t + self.d;
            for k in 1..=self.d {
                let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
                value += sign * binomial(self.d, k) * y[yi - k];
            }
            fitted.push(value);
        }
        let actual = &y[self.d..];
        let mae = accuracy::mean_absolute_error(&fitted, actual)?;
        let rmse = accuracy::root_mean_squared_error(&fitted, actual)?;

        let k_params = (self.p + self.q + 2) as f64;
        let loglik = -0.5 * n * ((2.0 * std::f64::consts::PI * sigma2).ln() + 1.0);
        let metrics = FitMetrics {
            mae: round2(mae),
            rmse: round2(rmse),
            aic: round2(-2.0 * loglik + 2.0 * k_params),
            bic: round2(-2.0 * loglik + k_params * n.ln()),
        };

        let level_tails: Vec<f64> = (0..self.d)
            .map(|k| {
                let level = difference(&y, k);
                level[level.len() - 1]
            })
            .collect();

        log::debug!(
            "{} fitted: sigma2={:.6}, mae={}, rmse={}",
            self.name,
            sigma2,
            metrics.mae,
            metrics.rmse
        );

        Ok(FittedArima {
            name: self.name.clone(),
            p: self.p,
            d: self.d,
            q: self.q,
            ar,
            ma,
            mean,
            sigma2,
            z,
            residuals,
            level_tails,
            metrics,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl FittedArima {
    /// Psi weights of the forecast-error expansion, integrated through the
    /// differencing order
    fn psi_weights(&self, horizon: usize) -> Vec<f64> {
        let mut psi = vec![0.0; horizon];
        if horizon == 0 {
            return psi;
        }
        psi[0] = 1.0;
        for j in 1..horizon {
            let mut value = if j <= self.q { self.ma[j - 1] } else { 0.0 };
            for i in 1..=self.p.min(j) {
                value += self.ar[i - 1] * psi[j - i];
            }
            psi[j] = value;
        }
        for _ in 0..self.d {
            for j in 1..horizon {
                psi[j] += psi[j - 1];
            }
        }
        psi
    }
}

impl FittedSeriesModel for FittedArima {
    fn forecast(&self, horizon: usize) -> Result<ForecastBand> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be at least 1".to_string(),
            ));
        }

        // ARMA recursion on the centered scale; future shocks are zero.
        let n = self.z.len();
        let mut zext = self.z.clone();
        let mut point = Vec::with_capacity(horizon);
        for h in 0..horizon {
            let t = n + h;
            let mut pred = 0.0;
            for (i, &phi) in self.ar.iter().enumerate() {
                if t > i {
                    pred += phi * zext[t - 1 - i];
                }
            }
            for (j, &theta) in self.ma.iter().enumerate() {
                if t > j && t - 1 - j < n {
                    pred += theta * self.residuals[t - 1 - j];
                }
            }
            zext.push(pred);
            point.push(self.mean + pred);
        }

        // Integrate back through the differencing levels.
        for k in (0..self.d).rev() {
            let mut running = self.level_tails[k];
            for value in point.iter_mut() {
                running += *value;
                *value = running;
            }
        }

        if point.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::FitError(
                "Forecast diverged to a non-finite value".to_string(),
            ));
        }

        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| ForecastError::FitError(format!("Normal distribution: {e}")))?;
        let z_crit = normal.inverse_cdf(1.0 - CONFIDENCE_ALPHA / 2.0);

        let psi = self.psi_weights(horizon);
        let mut lower = Vec::with_capacity(horizon);
        let mut upper = Vec::with_capacity(horizon);
        let mut cumulative = 0.0;
        for h in 0..horizon {
            cumulative += psi[h] * psi[h];
            let se = (self.sigma2 * cumulative).sqrt();
            lower.push(point[h] - z_crit * se);
            upper.push(point[h] + z_crit * se);
        }

        ForecastBand::new(point, lower, upper)
    }

    fn metrics(&self) -> &FitMetrics {
        &self.metrics
    }

    fn name(&self) -> &str {
        &self.name
    }
}
