//! Viscometer apparatus geometry.

use ak_core::{Length, Volume, ensure_positive};
use serde::{Deserialize, Serialize};

use crate::KernelResult;

/// Fixed dimensions of the capillary viscometer, SI units.
///
/// Serialized with the short keys used by exported runs: `V`, `L`, `R_CAP`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApparatusGeometry {
    /// Capillary bore radius [m]
    #[serde(rename = "R_CAP")]
    pub capillary_radius: f64,
    /// Capillary length [m]
    #[serde(rename = "L")]
    pub capillary_length: f64,
    /// Reservoir (bulb) volume [m³]
    #[serde(rename = "V")]
    pub reservoir_volume: f64,
}

impl Default for ApparatusGeometry {
    /// Standard viscometer: 0.15 mm bore, 15 cm capillary, 500 mL bulb.
    fn default() -> Self {
        Self {
            capillary_radius: 1.5e-4,
            capillary_length: 0.15,
            reservoir_volume: 500e-6,
        }
    }
}

impl ApparatusGeometry {
    pub fn new(capillary_radius: f64, capillary_length: f64, reservoir_volume: f64) -> Self {
        Self {
            capillary_radius,
            capillary_length,
            reservoir_volume,
        }
    }

    pub fn from_quantities(radius: Length, length: Length, volume: Volume) -> Self {
        use uom::si::length::meter;
        use uom::si::volume::cubic_meter;
        Self::new(
            radius.get::<meter>(),
            length.get::<meter>(),
            volume.get::<cubic_meter>(),
        )
    }

    /// Check every dimension is finite and strictly positive.
    pub fn validate(&self) -> KernelResult<()> {
        ensure_positive(self.capillary_radius, "capillary radius")?;
        ensure_positive(self.capillary_length, "capillary length")?;
        ensure_positive(self.reservoir_volume, "reservoir volume")?;
        Ok(())
    }
}
