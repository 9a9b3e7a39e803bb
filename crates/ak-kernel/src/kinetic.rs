//! Kinetic-theory inversion from viscosity to molecular diameter.

use std::f64::consts::PI;

use ak_core::constants::{AVOGADRO, BOLTZMANN, GAS_CONSTANT};
use ak_core::ensure_positive;

use crate::KernelResult;

/// Which viscosity/cross-section relation to invert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiameterModel {
    /// Elementary kinetic theory:
    /// `d = sqrt( 2/(3·π^1.5) · sqrt(m·k_B·T) / η )`, `m = M / N_A`
    #[default]
    Kinetic,
    /// Chapman–Enskog hard spheres:
    /// `d = sqrt( (5/16)·sqrt(M·R·T/π) / (N_A·η) )`
    HardSphere,
}

impl DiameterModel {
    pub fn key(&self) -> &'static str {
        match self {
            DiameterModel::Kinetic => "kinetic",
            DiameterModel::HardSphere => "hard-sphere",
        }
    }

    /// Effective collision diameter [m].
    pub fn diameter(
        &self,
        viscosity: f64,
        molar_mass: f64,
        temperature_k: f64,
    ) -> KernelResult<f64> {
        match self {
            DiameterModel::Kinetic => molecular_diameter(viscosity, molar_mass, temperature_k),
            DiameterModel::HardSphere => {
                hard_sphere_diameter(viscosity, molar_mass, temperature_k)
            }
        }
    }
}

impl std::str::FromStr for DiameterModel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kinetic" => Ok(DiameterModel::Kinetic),
            "hard-sphere" | "hardsphere" | "chapman-enskog" => Ok(DiameterModel::HardSphere),
            _ => Err("unknown diameter model"),
        }
    }
}

/// Effective collision diameter [m] by elementary kinetic theory.
///
/// `viscosity` in Pa·s, `molar_mass` in kg/mol, `temperature_k` in K; all must be
/// finite and positive.
pub fn molecular_diameter(
    viscosity: f64,
    molar_mass: f64,
    temperature_k: f64,
) -> KernelResult<f64> {
    let viscosity = ensure_positive(viscosity, "viscosity")?;
    let molar_mass = ensure_positive(molar_mass, "molar mass")?;
    let t = ensure_positive(temperature_k, "temperature")?;

    let molecule_mass = molar_mass / AVOGADRO;
    let prefactor = 2.0 / (3.0 * PI.powf(1.5));
    Ok((prefactor * (molecule_mass * BOLTZMANN * t).sqrt() / viscosity).sqrt())
}

/// Effective collision diameter [m] of Chapman–Enskog hard spheres.
pub fn hard_sphere_diameter(
    viscosity: f64,
    molar_mass: f64,
    temperature_k: f64,
) -> KernelResult<f64> {
    let viscosity = ensure_positive(viscosity, "viscosity")?;
    let molar_mass = ensure_positive(molar_mass, "molar mass")?;
    let t = ensure_positive(temperature_k, "temperature")?;

    let numerator = (5.0 / 16.0) * (molar_mass * GAS_CONSTANT * t / PI).sqrt();
    Ok((numerator / (AVOGADRO * viscosity)).sqrt())
}
