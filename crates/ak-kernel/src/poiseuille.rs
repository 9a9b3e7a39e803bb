//! Poiseuille's law for a reservoir draining through a capillary.
//!
//! ```text
//! 1/p = 1/p₀ + slope·t,   slope = π·r⁴ / (16·η·L·V)
//! ```

use std::f64::consts::PI;

use ak_core::{ensure_finite, ensure_positive};

use crate::{ApparatusGeometry, KernelError, KernelResult};

/// Dynamic viscosity [Pa·s] from the fitted `1/p` vs `t` slope [Pa⁻¹·s⁻¹].
///
/// A draining reservoir always gives a positive slope; anything else is
/// reported as [`KernelError::PhysicallyInvalid`].
pub fn viscosity_from_slope(slope: f64, geometry: &ApparatusGeometry) -> KernelResult<f64> {
    geometry.validate()?;
    let slope = ensure_finite(slope, "slope")?;
    if slope <= 0.0 {
        return Err(KernelError::PhysicallyInvalid {
            what: "inverse pressure does not increase with time",
        });
    }
    Ok(PI * geometry.capillary_radius.powi(4)
        / (16.0 * slope * geometry.capillary_length * geometry.reservoir_volume))
}

/// Expected `1/p` vs `t` slope for a gas of the given viscosity.
pub fn slope_from_viscosity(viscosity: f64, geometry: &ApparatusGeometry) -> KernelResult<f64> {
    geometry.validate()?;
    let viscosity = ensure_positive(viscosity, "viscosity")?;
    Ok(PI * geometry.capillary_radius.powi(4)
        / (16.0 * viscosity * geometry.capillary_length * geometry.reservoir_volume))
}
