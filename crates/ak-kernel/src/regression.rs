//! Ordinary least-squares fit of inverse pressure against time.
//!
//! For a reservoir draining through a capillary, `1/p` grows linearly with `t`.
//! The fit uses the closed-form normal equations:
//!
//! ```text
//! slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! intercept = (Σy − slope·Σx) / n
//! R²        = 1 − SS_res / SS_tot
//! ```
//!
//! All sums accumulate left to right in sample order, so identical input gives
//! bit-identical output.

use ak_core::{ensure_finite, ensure_positive, sum_in_order};
use tracing::{debug, warn};

use crate::{KernelError, KernelResult, Sample};

/// Straight-line fit `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination. NaN when the response has zero variance.
    pub r_squared: f64,
}

impl FitResult {
    /// `false` when every `y` was identical and R² has no meaning.
    pub fn has_r_squared(&self) -> bool {
        !self.r_squared.is_nan()
    }

    /// R² as a percentage, or `None` when undefined.
    pub fn r_squared_percent(&self) -> Option<f64> {
        self.has_r_squared().then(|| self.r_squared * 100.0)
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y` against `x`.
pub fn fit_line(x: &[f64], y: &[f64]) -> KernelResult<FitResult> {
    if x.len() != y.len() {
        return Err(KernelError::InvalidInput {
            what: "time and pressure sequences differ in length",
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(KernelError::InvalidInput {
            what: "at least two samples are required",
        });
    }
    for &xi in x {
        ensure_finite(xi, "time")?;
    }
    for &yi in y {
        ensure_finite(yi, "inverse pressure")?;
    }
    if x.iter().all(|&xi| xi == x[0]) {
        return Err(KernelError::DegenerateInput {
            what: "all time values are identical",
        });
    }

    let nf = n as f64;
    let sum_x = sum_in_order(x.iter().copied());
    let sum_y = sum_in_order(y.iter().copied());
    let sum_xy = sum_in_order(x.iter().zip(y).map(|(xi, yi)| xi * yi));
    let sum_x2 = sum_in_order(x.iter().map(|xi| xi * xi));

    let denominator = nf * sum_x2 - sum_x * sum_x;
    if ![sum_x, sum_y, sum_xy, sum_x2, denominator]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(KernelError::InvalidInput {
            what: "time values overflow the regression sums",
        });
    }
    // Mathematically >= 0; rounding on near-identical x can push it below
    if denominator <= 0.0 {
        return Err(KernelError::DegenerateInput {
            what: "regression denominator is zero",
        });
    }

    let constant_response = y.iter().all(|&yi| yi == y[0]);
    let (slope, intercept) = if constant_response {
        (0.0, y[0])
    } else {
        let slope = (nf * sum_xy - sum_x * sum_y) / denominator;
        (slope, (sum_y - slope * sum_x) / nf)
    };

    let mean_y = sum_y / nf;
    let ss_tot = sum_in_order(y.iter().map(|yi| (yi - mean_y).powi(2)));
    let ss_res = sum_in_order(
        x.iter()
            .zip(y)
            .map(|(xi, yi)| (yi - (slope * xi + intercept)).powi(2)),
    );

    let r_squared = if ss_tot == 0.0 {
        warn!(n, "zero variance in inverse pressure; R² undefined");
        f64::NAN
    } else {
        1.0 - ss_res / ss_tot
    };

    debug!(n, slope, intercept, r_squared, ss_res, ss_tot, "least-squares fit");

    Ok(FitResult {
        slope,
        intercept,
        r_squared,
    })
}

/// Fit `1/pressure` against `time` from parallel columns.
///
/// Fails with [`KernelError::InvalidInput`] on mismatched lengths, fewer than two
/// samples or any pressure that is not strictly positive.
pub fn fit_inverse_pressure(times: &[f64], pressures: &[f64]) -> KernelResult<FitResult> {
    if times.len() != pressures.len() {
        return Err(KernelError::InvalidInput {
            what: "time and pressure sequences differ in length",
        });
    }
    let inverse = pressures
        .iter()
        .map(|&p| ensure_positive(p, "pressure").map(|p| 1.0 / p))
        .collect::<Result<Vec<f64>, _>>()?;
    fit_line(times, &inverse)
}

pub fn fit_samples(samples: &[Sample]) -> KernelResult<FitResult> {
    let (times, pressures) = Sample::to_columns(samples);
    fit_inverse_pressure(&times, &pressures)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use ak_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn r_squared_never_exceeds_one(
            y in prop::collection::vec(1e-6_f64..1e-4, 3..40),
        ) {
            let x: Vec<f64> = (0..y.len()).map(|i| i as f64 * 15.0).collect();
            let fit = fit_line(&x, &y).unwrap();
            if fit.has_r_squared() {
                prop_assert!(fit.r_squared <= 1.0 + 1e-12);
            }
        }

        #[test]
        fn pressure_scaling_keeps_r_squared(
            p in prop::collection::vec(1.0e4_f64..2.0e5, 3..30),
        ) {
            let t: Vec<f64> = (0..p.len()).map(|i| i as f64 * 10.0).collect();
            let doubled: Vec<f64> = p.iter().map(|pi| pi * 2.0).collect();
            let base = fit_inverse_pressure(&t, &p).unwrap();
            let scaled = fit_inverse_pressure(&t, &doubled).unwrap();
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            let slope_tol = Tolerances { abs: 1e-300, rel: 1e-9 };
            prop_assert!(nearly_equal(scaled.slope, base.slope / 2.0, slope_tol));
            if base.has_r_squared() {
                prop_assert!(nearly_equal(scaled.r_squared, base.r_squared, tol));
            }
        }
    }
}
