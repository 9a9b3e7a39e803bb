//! Building and writing exported runs.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use ak_kernel::{AnalysisRequest, AnalysisResult};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use crate::types::{CalculatedResults, RunRecord};
use crate::{ResultsError, ResultsResult};

/// Fixed-point with four decimals, as shown to users.
pub fn format_fixed4(value: f64) -> String {
    format!("{value:.4}")
}

/// Assemble the export document for one analysis.
pub fn build_record(
    request: &AnalysisRequest<'_>,
    result: &AnalysisResult,
    timestamp: DateTime<Utc>,
) -> RunRecord {
    RunRecord {
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        gas: request.gas.key().to_string(),
        temperature_k: request.temperature_k,
        apparatus_constants: request.geometry,
        raw_data: request.samples.to_vec(),
        calculated_results: CalculatedResults {
            viscosity_upa_s: format_fixed4(result.viscosity_micropascal_seconds()),
            diameter_nm: format_fixed4(result.diameter_nanometres()),
            r_squared: (!result.r_squared.is_nan()).then_some(result.r_squared),
        },
    }
}

/// `AeroKinetic_<gas>_<unix millis>.json`
pub fn export_file_name(gas: &str, timestamp: DateTime<Utc>) -> String {
    format!("{}.json", export_file_stem(gas, timestamp))
}

fn export_file_stem(gas: &str, timestamp: DateTime<Utc>) -> String {
    format!("AeroKinetic_{}_{}", gas, timestamp.timestamp_millis())
}

pub(crate) fn record_timestamp(record: &RunRecord) -> ResultsResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&record.timestamp)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| ResultsError::InvalidTimestamp(record.timestamp.clone()))
}

/// Write `record` as pretty JSON into `dir`, returning the file path.
///
/// Never replaces an existing export: a run whose name is taken gets a
/// numeric suffix (`AeroKinetic_N2_<millis>_1.json`).
pub fn write_record(dir: &Path, record: &RunRecord) -> ResultsResult<PathBuf> {
    let timestamp = record_timestamp(record)?;
    let json = serde_json::to_string_pretty(record)?;
    fs::create_dir_all(dir)?;

    let stem = export_file_stem(&record.gas, timestamp);
    let mut path = dir.join(format!("{stem}.json"));
    let mut suffix = 0u32;
    let mut file = loop {
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => break file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                suffix += 1;
                path = dir.join(format!("{stem}_{suffix}.json"));
            }
            Err(err) => return Err(err.into()),
        }
    };
    file.write_all(json.as_bytes())?;
    info!(path = %path.display(), gas = %record.gas, "exported run");
    Ok(path)
}
