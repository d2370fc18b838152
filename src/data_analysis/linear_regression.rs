// src/data_analysis/linear_regression.rs

use ndarray::Array1;

use crate::error::LogError;

/// Result of an ordinary-least-squares fit of y against x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub n: usize,
}

impl RegressionFit {
    /// Evaluates the fitted line at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Closed-form OLS fit: slope = cov(x,y)/var(x), intercept = mean(y) - slope*mean(x),
/// R^2 = 1 - SS_res/SS_tot.
///
/// Needs at least two points with non-zero x-variance. A perfectly constant y
/// (SS_tot == 0) fits exactly, so its R^2 is reported as 1.0.
pub fn linear_regression(series: &[(f64, f64)]) -> Result<RegressionFit, LogError> {
    if series.len() < 2 {
        return Err(LogError::InsufficientData(format!(
            "need at least 2 points, got {}",
            series.len()
        )));
    }

    let xs = Array1::from_iter(series.iter().map(|(x, _)| *x));
    let ys = Array1::from_iter(series.iter().map(|(_, y)| *y));
    let n = series.len();

    // mean() only fails on empty arrays, which the length check rules out.
    let x_mean = xs.mean().unwrap_or(0.0);
    let y_mean = ys.mean().unwrap_or(0.0);

    let x_centered = &xs - x_mean;
    let y_centered = &ys - y_mean;

    let ss_xx = x_centered.mapv(|v| v * v).sum();
    if ss_xx <= f64::EPSILON {
        return Err(LogError::InsufficientData(
            "zero variance in x values".to_string(),
        ));
    }
    let ss_xy = (&x_centered * &y_centered).sum();

    let slope = ss_xy / ss_xx;
    let intercept = y_mean - slope * x_mean;

    let residuals = &ys - &xs.mapv(|x| slope * x + intercept);
    let ss_res = residuals.mapv(|v| v * v).sum();
    let ss_tot = y_centered.mapv(|v| v * v).sum();

    let r_squared = if ss_tot <= f64::EPSILON {
        // Flat series: the fit is exact by construction.
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(RegressionFit {
        slope,
        intercept,
        r_squared,
        n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_exact_line_recovers_slope_and_intercept() {
        let series: Vec<(f64, f64)> = (0..50).map(|i| (i as f64, 2.0 * i as f64 + 1.0)).collect();
        let fit = linear_regression(&series).unwrap();
        assert!((fit.slope - 2.0).abs() < TOL);
        assert!((fit.intercept - 1.0).abs() < TOL);
        assert!((fit.r_squared - 1.0).abs() < TOL);
        assert_eq!(fit.n, 50);
    }

    #[test]
    fn test_battery_drain_negative_slope() {
        // Discharging battery: 4.2 V dropping 1 mV per sample.
        let series: Vec<(f64, f64)> = (0..100).map(|i| (i as f64, 4.2 - 0.001 * i as f64)).collect();
        let fit = linear_regression(&series).unwrap();
        assert!((fit.slope - (-0.001)).abs() < TOL);
        assert!((fit.intercept - 4.2).abs() < TOL);
    }

    #[test]
    fn test_reference_closed_form_on_noisy_data() {
        // Hand-computed reference: x = [0,1,2,3], y = [1,3,2,5].
        // mean x = 1.5, mean y = 2.75, ss_xy = 5.5, ss_xx = 5.0
        // slope = 1.1, intercept = 1.1, predictions = [1.1, 2.2, 3.3, 4.4]
        // ss_res = 0.01 + 0.64 + 1.69 + 0.36 = 2.7, ss_tot = 8.75
        let series = [(0.0, 1.0), (1.0, 3.0), (2.0, 2.0), (3.0, 5.0)];
        let fit = linear_regression(&series).unwrap();
        assert!((fit.slope - 1.1).abs() < TOL);
        assert!((fit.intercept - 1.1).abs() < TOL);
        assert!((fit.r_squared - (1.0 - 2.7 / 8.75)).abs() < TOL);
    }

    #[test]
    fn test_flat_series_has_zero_slope_full_r_squared() {
        let series: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 3.85)).collect();
        let fit = linear_regression(&series).unwrap();
        assert!(fit.slope.abs() < TOL);
        assert!((fit.intercept - 3.85).abs() < TOL);
        assert!((fit.r_squared - 1.0).abs() < TOL);
    }

    #[test]
    fn test_sample_evaluates_fit() {
        let fit = RegressionFit {
            slope: -0.5,
            intercept: 4.0,
            r_squared: 1.0,
            n: 2,
        };
        assert!((fit.sample(0.0) - 4.0).abs() < TOL);
        assert!((fit.sample(4.0) - 2.0).abs() < TOL);
    }

    #[test]
    fn test_too_few_points_is_error() {
        assert!(matches!(
            linear_regression(&[(0.0, 1.0)]),
            Err(LogError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_zero_x_variance_is_error() {
        let series = [(2.0, 1.0), (2.0, 3.0), (2.0, 5.0)];
        assert!(matches!(
            linear_regression(&series),
            Err(LogError::InsufficientData(_))
        ));
    }
}
