//! Gas table errors.

use ak_core::AkError;
use thiserror::Error;

/// Result type for gas table operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors that can occur when querying gas reference data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// No table entry for the requested identifier.
    #[error("Unknown gas: {key}")]
    NotFound { key: String },

    /// Non-physical argument (non-positive or non-finite temperature, etc.).
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<AkError> for GasError {
    fn from(err: AkError) -> Self {
        match err {
            AkError::NonFinite { what, .. } | AkError::NonPositive { what, .. } => {
                GasError::InvalidArg { what }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GasError::NotFound { key: "Xe".into() };
        assert!(err.to_string().contains("Xe"));
    }

    #[test]
    fn core_error_maps_to_invalid_arg() {
        let core = AkError::NonPositive {
            what: "temperature",
            value: -1.0,
        };
        let err: GasError = core.into();
        assert_eq!(err, GasError::InvalidArg { what: "temperature" });
    }
}
