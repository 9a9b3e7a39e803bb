//! Run storage API.

use std::fs;
use std::path::{Path, PathBuf};

use crate::export::write_record;
use crate::types::{RunId, RunRecord};
use crate::{ResultsError, ResultsResult};

/// Directory of exported runs, one JSON file per run.
#[derive(Clone)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }

    fn run_path(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(format!("{run_id}.json"))
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_path(run_id).exists()
    }

    /// Save a run; returns its id (the file stem).
    pub fn save_run(&self, record: &RunRecord) -> ResultsResult<RunId> {
        let path = write_record(&self.root_dir, record)?;
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| ResultsError::InvalidRecord("export path has no file stem".to_string()))
    }

    pub fn load_run(&self, run_id: &str) -> ResultsResult<RunRecord> {
        let path = self.run_path(run_id);
        if !path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Ids of all stored runs for `gas`, oldest first.
    pub fn list_runs(&self, gas: &str) -> ResultsResult<Vec<RunId>> {
        let mut runs = Vec::new();

        for entry in fs::read_dir(&self.root_dir)? {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Some(run_id) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            if let Ok(record) = self.load_run(&run_id) {
                if record.gas == gas {
                    runs.push((record.timestamp, run_id));
                }
            }
        }

        runs.sort();
        Ok(runs.into_iter().map(|(_, id)| id).collect())
    }

    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        let path = self.run_path(run_id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
