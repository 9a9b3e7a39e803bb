//! Pressure samples.

use serde::{Deserialize, Serialize};

use crate::{KernelError, KernelResult};

/// One reading: elapsed time [s] and reservoir pressure [Pa].
///
/// Serialized with the short keys `t` and `p` used by exported runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "t")]
    pub time: f64,
    #[serde(rename = "p")]
    pub pressure: f64,
}

impl Sample {
    pub fn new(time: f64, pressure: f64) -> Self {
        Self { time, pressure }
    }

    /// Zip parallel time/pressure columns into samples.
    pub fn from_columns(times: &[f64], pressures: &[f64]) -> KernelResult<Vec<Sample>> {
        if times.len() != pressures.len() {
            return Err(KernelError::InvalidInput {
                what: "time and pressure sequences differ in length",
            });
        }
        Ok(times
            .iter()
            .zip(pressures)
            .map(|(&t, &p)| Sample::new(t, p))
            .collect())
    }

    /// Split samples back into parallel columns.
    pub fn to_columns(samples: &[Sample]) -> (Vec<f64>, Vec<f64>) {
        samples.iter().map(|s| (s.time, s.pressure)).unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_roundtrip() {
        let times = [0.0, 60.0, 120.0];
        let pressures = [1.0e5, 9.0e4, 8.0e4];
        let samples = Sample::from_columns(&times, &pressures).unwrap();
        assert_eq!(samples[1], Sample::new(60.0, 9.0e4));

        let (t, p) = Sample::to_columns(&samples);
        assert_eq!(t, times);
        assert_eq!(p, pressures);
    }

    #[test]
    fn mismatched_columns_rejected() {
        let err = Sample::from_columns(&[0.0, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, KernelError::InvalidInput { .. }));
    }

    #[test]
    fn serializes_with_short_keys() {
        let json = serde_json::to_string(&Sample::new(60.0, 95000.0)).unwrap();
        assert_eq!(json, r#"{"t":60.0,"p":95000.0}"#);
    }
}
