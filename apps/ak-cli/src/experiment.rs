//! Experiment files.
//!
//! YAML documents naming the gas, run temperature, optional apparatus geometry and
//! the recorded samples. Previously exported run JSON loads as well, since the
//! export keys are accepted as aliases.

use std::path::Path;

use ak_gases::{GasProperties, lookup};
use ak_kernel::{ApparatusGeometry, Sample};
use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// Temperature assumed when a file does not give one [K].
pub const DEFAULT_TEMPERATURE_K: f64 = 298.15;

#[derive(Debug, Clone, Deserialize)]
pub struct ExperimentFile {
    #[serde(default)]
    pub gas: Option<String>,
    #[serde(default, alias = "temperature_K")]
    pub temperature_k: Option<f64>,
    #[serde(default, alias = "apparatus_constants")]
    pub apparatus: Option<ApparatusGeometry>,
    #[serde(alias = "raw_data")]
    pub samples: Vec<Sample>,
}

/// Experiment with command-line overrides applied.
#[derive(Debug, Clone)]
pub struct Experiment {
    pub gas: &'static GasProperties,
    pub temperature_k: f64,
    pub geometry: ApparatusGeometry,
    pub samples: Vec<Sample>,
}

impl ExperimentFile {
    pub fn parse(text: &str, path: &Path) -> CliResult<Self> {
        serde_yaml::from_str(text).map_err(|source| CliError::ExperimentParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ExperimentRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Apply overrides; flags win over file values.
    pub fn resolve(
        self,
        gas_override: Option<&str>,
        temperature_override: Option<f64>,
    ) -> CliResult<Experiment> {
        let gas_key = gas_override
            .map(str::to_string)
            .or(self.gas)
            .ok_or_else(|| CliError::InvalidInput("no gas given in file or via --gas".into()))?;
        Ok(Experiment {
            gas: lookup(&gas_key)?,
            temperature_k: temperature_override
                .or(self.temperature_k)
                .unwrap_or(DEFAULT_TEMPERATURE_K),
            geometry: self.apparatus.unwrap_or_default(),
            samples: self.samples,
        })
    }
}
