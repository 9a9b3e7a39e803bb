//! ak-core: stable foundation for aerokinetic.
//!
//! Contains:
//! - units (uom SI types + constructors, fixed physical constants)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{AkError, AkResult};
pub use numeric::*;
pub use units::*;
