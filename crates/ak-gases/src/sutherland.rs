//! Sutherland's law for gas viscosity.
//!
//! ```text
//! μ(T) = μ_ref · (T / T_ref)^1.5 · (T_ref + C) / (T + C)
//! ```
//!
//! with `T_ref = 298.15 K` and `C` the gas's Sutherland constant.

use ak_core::{Temperature, constants::T_REF_K, ensure_positive, kelvin_of};

use crate::{GasProperties, GasResult};

/// Viscosity [Pa·s] of `gas` at `temperature_k`.
pub fn sutherland_viscosity(gas: &GasProperties, temperature_k: f64) -> GasResult<f64> {
    let t = ensure_positive(temperature_k, "temperature")?;
    let c = gas.sutherland_constant;
    Ok(gas.reference_viscosity * (t / T_REF_K).powf(1.5) * (T_REF_K + c) / (t + c))
}

/// Typed variant of [`sutherland_viscosity`].
pub fn sutherland_viscosity_at(gas: &GasProperties, temperature: Temperature) -> GasResult<f64> {
    sutherland_viscosity(gas, kelvin_of(temperature))
}
