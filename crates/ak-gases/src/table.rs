//! Read-only gas property table.

use ak_core::{DynVisc, pa_s};

use crate::{Gas, GasResult};

/// Reference data for one gas species.
///
/// Viscosities are tabulated at [`ak_core::constants::T_REF_K`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    pub gas: Gas,
    pub name: &'static str,
    /// Molar mass [kg/mol]
    pub molar_mass: f64,
    /// Dynamic viscosity at the reference temperature [Pa·s]
    pub reference_viscosity: f64,
    /// Sutherland constant [K]
    pub sutherland_constant: f64,
}

impl GasProperties {
    pub fn key(&self) -> &'static str {
        self.gas.key()
    }

    pub fn reference_viscosity_quantity(&self) -> DynVisc {
        pa_s(self.reference_viscosity)
    }
}

const GAS_TABLE: [GasProperties; 4] = [
    GasProperties {
        gas: Gas::N2,
        name: "Nitrogen",
        molar_mass: 28.0134e-3,
        reference_viscosity: 17.76e-6,
        sutherland_constant: 111.0,
    },
    GasProperties {
        gas: Gas::Ar,
        name: "Argon",
        molar_mass: 39.948e-3,
        reference_viscosity: 22.61e-6,
        sutherland_constant: 144.0,
    },
    GasProperties {
        gas: Gas::He,
        name: "Helium",
        molar_mass: 4.0026e-3,
        reference_viscosity: 19.85e-6,
        sutherland_constant: 79.0,
    },
    GasProperties {
        gas: Gas::CO2,
        name: "Carbon Dioxide",
        molar_mass: 44.01e-3,
        reference_viscosity: 14.90e-6,
        sutherland_constant: 240.0,
    },
];

/// All entries, in table order.
pub fn gas_table() -> &'static [GasProperties] {
    &GAS_TABLE
}

pub(crate) fn entry(gas: Gas) -> &'static GasProperties {
    match gas {
        Gas::N2 => &GAS_TABLE[0],
        Gas::Ar => &GAS_TABLE[1],
        Gas::He => &GAS_TABLE[2],
        Gas::CO2 => &GAS_TABLE[3],
    }
}

/// Look up a gas by identifier or alias.
///
/// Unknown identifiers fail with [`crate::GasError::NotFound`]; there is no default gas.
pub fn lookup(key: &str) -> GasResult<&'static GasProperties> {
    let gas: Gas = key.parse()?;
    Ok(entry(gas))
}
