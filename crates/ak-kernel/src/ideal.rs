//! Noise-free reference runs.
//!
//! Generates the pressure trace an ideal apparatus would record for a gas of known
//! viscosity. Used to verify the analysis end to end.

use ak_core::{ensure_finite, ensure_positive};

use crate::{ApparatusGeometry, KernelError, KernelResult, Sample, slope_from_viscosity};

/// `count` evenly spaced times from 0 to `duration` inclusive.
pub fn evenly_spaced(duration: f64, count: usize) -> KernelResult<Vec<f64>> {
    let duration = ensure_positive(duration, "duration")?;
    if count < 2 {
        return Err(KernelError::InvalidInput {
            what: "at least two samples are required",
        });
    }
    let last = (count - 1) as f64;
    Ok((0..count).map(|i| (i as f64 / last) * duration).collect())
}

/// Pressure readings `p(t) = 1 / (1/p₀ + slope·t)` at each of `times`.
pub fn ideal_samples(
    geometry: &ApparatusGeometry,
    viscosity: f64,
    initial_pressure: f64,
    times: &[f64],
) -> KernelResult<Vec<Sample>> {
    let slope = slope_from_viscosity(viscosity, geometry)?;
    let p0 = ensure_positive(initial_pressure, "initial pressure")?;
    times
        .iter()
        .map(|&t| {
            let t = ensure_finite(t, "time")?;
            if t < 0.0 {
                return Err(KernelError::InvalidInput {
                    what: "time must not be negative",
                });
            }
            Ok(Sample::new(t, 1.0 / (1.0 / p0 + slope * t)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_endpoints() {
        let t = evenly_spaced(300.0, 6).unwrap();
        assert_eq!(t.len(), 6);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[5], 300.0);
        assert!((t[1] - 60.0).abs() < 1e-12);
    }

    #[test]
    fn evenly_spaced_needs_two_points() {
        assert!(evenly_spaced(300.0, 1).is_err());
        assert!(evenly_spaced(0.0, 5).is_err());
    }

    #[test]
    fn pressure_falls_over_time() {
        let times = evenly_spaced(300.0, 20).unwrap();
        let samples =
            ideal_samples(&ApparatusGeometry::default(), 17.76e-6, 100_000.0, &times).unwrap();
        assert!((samples[0].pressure - 100_000.0).abs() < 1e-9);
        assert!(
            samples
                .windows(2)
                .all(|pair| pair[1].pressure < pair[0].pressure)
        );
    }

    #[test]
    fn negative_time_rejected() {
        let err = ideal_samples(&ApparatusGeometry::default(), 17.76e-6, 1e5, &[-1.0, 0.0])
            .unwrap_err();
        assert!(matches!(err, KernelError::InvalidInput { .. }));
    }
}
