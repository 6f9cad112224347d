//! Run storage API.

use crate::types::{RunManifest, TrajectoryRecord};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

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

    /// Store next to the project file, under `.dampsim/runs`.
    pub fn for_project(project_path: &Path) -> ResultsResult<Self> {
        let project_dir = project_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "project path has no parent directory".to_string(),
            })?;
        let runs_dir = project_dir.join(".dampsim").join("runs");
        Self::new(runs_dir)
    }

    fn run_dir(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id)
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_dir(run_id).join("manifest.json").exists()
    }

    pub fn save_run(
        &self,
        manifest: &RunManifest,
        records: &[TrajectoryRecord],
    ) -> ResultsResult<()> {
        let run_dir = self.run_dir(&manifest.run_id);
        fs::create_dir_all(&run_dir)?;

        let trajectory_path = run_dir.join("trajectory.jsonl");
        let mut content = String::new();
        for record in records {
            content.push_str(&serde_json::to_string(record)?);
            content.push('\n');
        }
        fs::write(trajectory_path, content)?;

        // Manifest last: its presence marks a complete run.
        let manifest_path = run_dir.join("manifest.json");
        fs::write(manifest_path, serde_json::to_string_pretty(manifest)?)?;

        Ok(())
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let manifest_path = self.run_dir(run_id).join("manifest.json");

        if !manifest_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_trajectory(&self, run_id: &str) -> ResultsResult<Vec<TrajectoryRecord>> {
        let trajectory_path = self.run_dir(run_id).join("trajectory.jsonl");

        if !trajectory_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(trajectory_path)?;
        let mut records = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                records.push(serde_json::from_str(line)?);
            }
        }

        Ok(records)
    }

    /// All readable runs, oldest first.
    pub fn list_runs(&self) -> ResultsResult<Vec<RunManifest>> {
        let mut runs = Vec::new();

        if !self.root_dir.exists() {
            return Ok(runs);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let run_id = entry.file_name().to_string_lossy().to_string();
            match self.load_manifest(&run_id) {
                Ok(manifest) => runs.push(manifest),
                Err(e) => warn!(run_id = %run_id, error = %e, "skipping unreadable run"),
            }
        }

        runs.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(runs)
    }

    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        let run_dir = self.run_dir(run_id);
        if run_dir.exists() {
            fs::remove_dir_all(run_dir)?;
        }
        Ok(())
    }
}
