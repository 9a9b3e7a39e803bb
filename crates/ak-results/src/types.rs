//! Exported run document.

use ak_kernel::{ApparatusGeometry, Sample};
use serde::{Deserialize, Serialize};

pub type RunId = String;

/// One analysis run as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// RFC 3339 UTC, millisecond precision
    pub timestamp: String,
    pub gas: String,
    #[serde(rename = "temperature_K")]
    pub temperature_k: f64,
    pub apparatus_constants: ApparatusGeometry,
    pub raw_data: Vec<Sample>,
    pub calculated_results: CalculatedResults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedResults {
    /// Viscosity in µPa·s, four decimals
    #[serde(rename = "viscosity_uPa_s")]
    pub viscosity_upa_s: String,
    /// Molecular diameter in nm, four decimals
    pub diameter_nm: String,
    /// `null` when R² is undefined
    pub r_squared: Option<f64>,
}

impl CalculatedResults {
    /// Viscosity back in Pa·s.
    pub fn viscosity_pa_s(&self) -> Option<f64> {
        self.viscosity_upa_s.parse::<f64>().ok().map(|v| v * 1e-6)
    }

    /// Diameter back in metres.
    pub fn diameter_m(&self) -> Option<f64> {
        self.diameter_nm.parse::<f64>().ok().map(|d| d * 1e-9)
    }
}
