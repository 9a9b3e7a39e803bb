//! Kernel errors.

use ak_core::AkError;
use thiserror::Error;

/// Result type for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

/// Failure conditions of the analysis kernel.
///
/// All variants are local and recoverable: the caller corrects the input and retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Malformed arguments (length mismatch, too few samples, non-positive
    /// or non-finite physical quantities).
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// Data that cannot be fitted (no variation in time).
    #[error("Degenerate input: {what}")]
    DegenerateInput { what: &'static str },

    /// The fit succeeded but violates a physical constraint.
    #[error("Physically invalid: {what}")]
    PhysicallyInvalid { what: &'static str },
}

impl From<AkError> for KernelError {
    fn from(err: AkError) -> Self {
        match err {
            AkError::NonFinite { what, .. } | AkError::NonPositive { what, .. } => {
                KernelError::InvalidInput { what }
            }
        }
    }
}
