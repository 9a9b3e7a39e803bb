use crate::{AkError, AkResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// |measured - reference| / |reference|
pub fn relative_error(measured: Real, reference: Real) -> Real {
    (measured - reference).abs() / reference.abs()
}

pub fn ensure_finite(v: Real, what: &'static str) -> AkResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AkError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> AkResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(AkError::NonPositive { what, value: v })
    }
}

/// Sum in strict index order. Same input gives the same bits.
pub fn sum_in_order<I>(values: I) -> Real
where
    I: IntoIterator<Item = Real>,
{
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(1e-30, "tiny").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "zero"),
            Err(AkError::NonPositive { what: "zero", .. })
        ));
        assert!(matches!(
            ensure_positive(-2.0, "neg"),
            Err(AkError::NonPositive { .. })
        ));
        assert!(matches!(
            ensure_positive(Real::INFINITY, "inf"),
            Err(AkError::NonFinite { .. })
        ));
    }

    #[test]
    fn relative_error_is_symmetric_in_sign() {
        assert!(nearly_equal(
            relative_error(101.0, 100.0),
            0.01,
            Tolerances::default()
        ));
        assert!(nearly_equal(
            relative_error(99.0, 100.0),
            0.01,
            Tolerances::default()
        ));
    }

    #[test]
    fn sum_in_order_matches_left_fold() {
        let values = [1e16, 1.0, -1e16, 1.0];
        // Order-sensitive: 1e16 + 1.0 rounds back to 1e16
        let expected = ((1e16_f64 + 1.0) + -1e16) + 1.0;
        assert_eq!(sum_in_order(values), expected);
        assert_eq!(sum_in_order(Vec::<Real>::new()), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sum_in_order_is_deterministic(values in prop::collection::vec(-1e6_f64..1e6_f64, 0..64)) {
            let a = sum_in_order(values.iter().copied());
            let b = sum_in_order(values.iter().copied());
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
