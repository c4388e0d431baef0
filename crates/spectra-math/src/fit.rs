//! Closed-form least-squares line fit.
//!
//! Degree-1 counterpart of `polyfit(x, y, 1)`: slope and intercept are
//! computed directly from centred sums, no general polynomial solver.

use spectra_types::error::{SpectraError, SpectraResult};

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Least-squares line through `(x[i], y[i])`.
///
/// Requires at least two points, equal lengths, finite values and a
/// non-zero spread in `x`.
pub fn linear_least_squares(x: &[f64], y: &[f64]) -> SpectraResult<LinearFit> {
    if x.len() != y.len() {
        return Err(SpectraError::LinearFit(format!(
            "dimension mismatch: {} abscissae vs {} ordinates",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(SpectraError::LinearFit(format!(
            "need at least 2 points, got {}",
            x.len()
        )));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(SpectraError::LinearFit("non-finite input".to_string()));
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        sxy += dx * (yi - y_mean);
        sxx += dx * dx;
    }

    if sxx <= f64::EPSILON * n * x_mean.abs().max(1.0) {
        return Err(SpectraError::LinearFit(
            "abscissae have no spread".to_string(),
        ));
    }

    let slope = sxy / sxx;
    Ok(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line_recovered() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|v| 2.5 * v - 1.0).collect();
        let fit = linear_least_squares(&x, &y).unwrap();
        assert!((fit.slope - 2.5).abs() < 1e-12, "slope = {}", fit.slope);
        assert!((fit.intercept + 1.0).abs() < 1e-12);
        assert!((fit.eval(10.0) - 24.0).abs() < 1e-10);
    }

    #[test]
    fn test_constant_data_zero_slope() {
        let x = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5];
        let y = [0.8; 6];
        let fit = linear_least_squares(&x, &y).unwrap();
        assert!(fit.slope.abs() < 1e-12);
        assert!((fit.eval(3.0) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_known_regression() {
        // Soft soil short-period row: Sxy = -1.325, Sxx = 1.09375.
        let x = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5];
        let y = [2.4, 1.7, 1.3, 1.1, 0.9, 0.8];
        let fit = linear_least_squares(&x, &y).unwrap();
        assert!((fit.slope - (-1.325 / 1.09375)).abs() < 1e-12, "slope = {}", fit.slope);
        assert!((fit.intercept - 2.42667).abs() < 1e-4, "b = {}", fit.intercept);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(linear_least_squares(&[1.0, 2.0], &[1.0]).is_err());
        assert!(linear_least_squares(&[1.0], &[1.0]).is_err());
        assert!(linear_least_squares(&[1.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).is_err());
        assert!(linear_least_squares(&[1.0, f64::NAN], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(1.2345, 2), 1.23);
        assert_eq!(round_to(1.2367, 2), 1.24);
        assert_eq!(round_to(-0.456, 2), -0.46);
        assert_eq!(round_to(0.8000000000000002, 2), 0.8);
    }
}
