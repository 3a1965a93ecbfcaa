use catapp_core::errors::{CatError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Sign used in fit labels for negative coefficients.
pub const EN_DASH: char = '\u{2013}';

/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// `[min(x), max(x)]`.
    pub x_endpoints: [f64; 2],
    /// The line evaluated at `x_endpoints`.
    pub y_endpoints: [f64; 2],
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn label(&self) -> String {
        fit_label(self.slope, self.intercept)
    }
}

/// Fits a line through `(xs[i], ys[i])`.
///
/// Returns `Ok(None)` with fewer than two points, or when the slope is
/// undefined: every x equal, or x spread so small its variance underflows.
pub fn compute_fit(xs: &[f64], ys: &[f64]) -> Result<Option<LinearFit>, CatError> {
    if xs.len() != ys.len() {
        return Err(CatError::Fit(
            ErrorInfo::new("fit_length_mismatch", "x and y must have the same length")
                .with_context("x_len", xs.len().to_string())
                .with_context("y_len", ys.len().to_string()),
        ));
    }
    if xs.len() < 2 {
        return Ok(None);
    }
    let x_min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if x_min == x_max {
        return Ok(None);
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;
    let (sxx, sxy) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(sxx, sxy), (&x, &y)| {
            let dx = x - x_mean;
            (sxx + dx * dx, sxy + dx * (y - y_mean))
        });
    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    if !slope.is_finite() || !intercept.is_finite() {
        return Ok(None);
    }

    let mut fit = LinearFit {
        slope,
        intercept,
        x_endpoints: [x_min, x_max],
        y_endpoints: [0.0; 2],
    };
    fit.y_endpoints = [fit.predict(x_min), fit.predict(x_max)];
    Ok(Some(fit))
}

/// Two-decimal magnitude and whether it should be shown as negative.
///
/// The sign follows the rounded value, so `-0.001` is not negative.
fn signed_magnitude(value: f64) -> (bool, String) {
    let magnitude = format!("{:.2}", value.abs());
    (value < 0.0 && magnitude != "0.00", magnitude)
}

/// Renders `Y = {m} X {±}{|b|}`, e.g. `Y = 1.00 X + 0.00` or `Y = –0.50 X – 1.20`.
pub fn fit_label(slope: f64, intercept: f64) -> String {
    let slope_text = match signed_magnitude(slope) {
        (true, magnitude) => format!("{EN_DASH}{magnitude}"),
        (false, magnitude) => magnitude,
    };
    let intercept_text = match signed_magnitude(intercept) {
        (true, magnitude) => format!("{EN_DASH} {magnitude}"),
        (false, magnitude) => format!("+ {magnitude}"),
    };
    format!("Y = {slope_text} X {intercept_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_diagonal() {
        let xs = [-0.5, -0.2, 0.1];
        let fit = compute_fit(&xs, &xs).unwrap().expect("fit");
        assert_eq!(fit.slope, 1.0);
        assert_eq!(fit.intercept, 0.0);
        assert_eq!(fit.x_endpoints, [-0.5, 0.1]);
        assert_eq!(fit.y_endpoints, [-0.5, 0.1]);
        assert_eq!(fit.label(), "Y = 1.00 X + 0.00");
    }

    #[test]
    fn recovers_known_line() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|x| -0.5 * x - 1.2).collect();
        let fit = compute_fit(&xs, &ys).unwrap().expect("fit");
        assert!((fit.slope + 0.5).abs() < 1e-12);
        assert!((fit.intercept + 1.2).abs() < 1e-12);
        assert_eq!(fit.label(), "Y = \u{2013}0.50 X \u{2013} 1.20");
    }

    #[test]
    fn least_squares_with_noise() {
        // Residuals +0.1, -0.2, +0.1 around y = 2x + 1 keep the same fit.
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.1, 2.8, 5.1];
        let fit = compute_fit(&xs, &ys).unwrap().expect("fit");
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn too_few_points_or_vertical_data_has_no_fit() {
        assert_eq!(compute_fit(&[], &[]).unwrap(), None);
        assert_eq!(compute_fit(&[0.3], &[0.7]).unwrap(), None);
        assert_eq!(compute_fit(&[0.1, 0.1, 0.1], &[0.0, 1.0, 2.0]).unwrap(), None);
    }

    #[test]
    fn underflowing_x_spread_has_no_fit() {
        assert_eq!(compute_fit(&[0.0, 1e-200], &[0.0, 1.0]).unwrap(), None);
        assert_eq!(compute_fit(&[1e-200, 0.0, 1e-200], &[1.0, 0.0, 1.0]).unwrap(), None);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = compute_fit(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, CatError::Fit(_)));
    }

    #[test]
    fn label_sign_follows_rounded_value() {
        assert_eq!(fit_label(0.996, -0.001), "Y = 1.00 X + 0.00");
        assert_eq!(fit_label(-0.004, 0.25), "Y = 0.00 X + 0.25");
        assert_eq!(fit_label(1.5, -0.3), "Y = 1.50 X \u{2013} 0.30");
    }
}
