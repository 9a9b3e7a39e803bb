//! Gas identifiers.

use crate::{GasError, GasProperties, table};

/// Gas species supported by the viscometer analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gas {
    /// Nitrogen (N₂)
    N2,
    /// Argon (Ar)
    Ar,
    /// Helium (He)
    He,
    /// Carbon dioxide (CO₂)
    CO2,
}

impl Gas {
    pub const ALL: [Gas; 4] = [Gas::N2, Gas::Ar, Gas::He, Gas::CO2];

    /// Canonical identifier, as used in exported runs.
    pub fn key(&self) -> &'static str {
        match self {
            Gas::N2 => "N2",
            Gas::Ar => "Ar",
            Gas::He => "He",
            Gas::CO2 => "CO2",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gas::N2 => "Nitrogen",
            Gas::Ar => "Argon",
            Gas::He => "Helium",
            Gas::CO2 => "Carbon Dioxide",
        }
    }

    /// Reference data for this gas.
    pub fn properties(&self) -> &'static GasProperties {
        table::entry(*self)
    }
}

impl std::fmt::Display for Gas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Gas {
    type Err = GasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N2" | "NITROGEN" => Ok(Gas::N2),
            "AR" | "ARGON" => Ok(Gas::Ar),
            "HE" | "HELIUM" => Ok(Gas::He),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Gas::CO2),
            _ => Err(GasError::NotFound { key: s.to_string() }),
        }
    }
}
