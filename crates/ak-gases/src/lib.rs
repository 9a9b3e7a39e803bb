//! ak-gases: reference gas data for aerokinetic.
//!
//! Provides:
//! - Gas identifiers (N2, Ar, He, CO2) with alias parsing
//! - The read-only gas property table (molar mass, reference viscosity, Sutherland constant)
//! - Sutherland's law for temperature-dependent viscosity
//!
//! # Example
//!
//! ```
//! use ak_gases::{lookup, sutherland_viscosity};
//!
//! let n2 = lookup("N2").unwrap();
//! let mu = sutherland_viscosity(n2, 350.0).unwrap();
//! assert!(mu > n2.reference_viscosity);
//! ```

pub mod error;
pub mod species;
pub mod sutherland;
pub mod table;

// Re-exports for ergonomics
pub use error::{GasError, GasResult};
pub use species::Gas;
pub use sutherland::{sutherland_viscosity, sutherland_viscosity_at};
pub use table::{GasProperties, gas_table, lookup};
