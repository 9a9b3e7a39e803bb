//! ak-kernel: capillary-flow viscometry analysis.
//!
//! Turns a series of reservoir pressure readings into a gas viscosity and an
//! effective molecular diameter:
//!
//! 1. `1/p` is regressed against `t` by ordinary least squares ([`regression`])
//! 2. the slope is inverted through Poiseuille's law into a viscosity ([`poiseuille`])
//! 3. the viscosity is inverted through kinetic theory into a diameter ([`kinetic`])
//!
//! Every function is pure and synchronous. Failures are reported as
//! [`KernelError`] values; nothing here panics on caller input.
//!
//! # Example
//!
//! ```
//! use ak_gases::Gas;
//! use ak_kernel::{AnalysisRequest, ApparatusGeometry, analyze, ideal_samples, evenly_spaced};
//!
//! let geometry = ApparatusGeometry::default();
//! let n2 = Gas::N2.properties();
//! let times = evenly_spaced(300.0, 6).unwrap();
//! let samples = ideal_samples(&geometry, n2.reference_viscosity, 100_000.0, &times).unwrap();
//!
//! let analysis = analyze(&AnalysisRequest::new(&samples, n2, 298.15)).unwrap();
//! assert!((analysis.result.viscosity - 17.76e-6).abs() < 1e-9);
//! ```

pub mod analysis;
pub mod error;
pub mod geometry;
pub mod ideal;
pub mod kinetic;
pub mod poiseuille;
pub mod regression;
pub mod sample;

// Re-exports for ergonomics
pub use analysis::{Analysis, AnalysisRequest, AnalysisResult, analyze};
pub use error::{KernelError, KernelResult};
pub use geometry::ApparatusGeometry;
pub use ideal::{evenly_spaced, ideal_samples};
pub use kinetic::{DiameterModel, hard_sphere_diameter, molecular_diameter};
pub use poiseuille::{slope_from_viscosity, viscosity_from_slope};
pub use regression::{FitResult, fit_inverse_pressure, fit_line, fit_samples};
pub use sample::Sample;
