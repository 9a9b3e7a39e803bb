//! Error type for the command-line front end.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read experiment file: {path}")]
    ExperimentRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse experiment file {path}: {source}")]
    ExperimentParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Gas error: {0}")]
    Gas(#[from] ak_gases::GasError),

    #[error("Analysis failed: {0}")]
    Kernel(#[from] ak_kernel::KernelError),

    #[error("Results error: {0}")]
    Results(#[from] ak_results::ResultsError),

    #[error("Verification failed: viscosity error {error_pct:.3}% exceeds {limit_pct}%")]
    VerificationFailed { error_pct: f64, limit_pct: f64 },
}

pub type CliResult<T> = Result<T, CliError>;
