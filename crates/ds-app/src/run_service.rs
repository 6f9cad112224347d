//! Compute-or-load trajectory runs backed by the project's run cache.

use std::path::Path;

use ds_core::Timer;
use ds_results::{
    RunManifest, RunStore, compute_run_id, records_from_trajectory, trajectory_from_records,
};
use ds_sim::{IntegrateOptions, Parameters, Trajectory, integrate_with};
use tracing::{debug, warn};

use crate::AppResult;

/// Part of every run ID; bump invalidates cached runs.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub integrate: IntegrateOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            integrate: IntegrateOptions::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    pub project_name: &'a str,
    pub params: Parameters,
    pub options: RunOptions,
}

#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub solve_time_s: f64,
    pub save_time_s: f64,
    pub load_cache_time_s: f64,
    pub total_time_s: f64,
    pub steps: usize,
}

#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub loaded_from_cache: bool,
    pub trajectory: Trajectory,
    pub timing: RunTimingSummary,
}

/// Return the cached trajectory for these inputs, or integrate and store it.
pub fn ensure_run(request: &RunRequest<'_>) -> AppResult<RunResponse> {
    let total = Timer::start("run total");
    let store = RunStore::for_project(request.project_path)?;
    let max_steps = request.options.integrate.max_steps;
    let run_id = compute_run_id(&request.params, max_steps, ENGINE_VERSION);
    let mut timing = RunTimingSummary::default();

    if request.options.use_cache && store.has_run(&run_id) {
        let load = Timer::start("load cached run");
        match store.load_trajectory(&run_id) {
            Ok(records) => {
                timing.load_cache_time_s = load.stop();
                let trajectory = trajectory_from_records(&records);
                timing.steps = trajectory.len().saturating_sub(1);
                timing.total_time_s = total.stop();
                debug!(run_id = %run_id, "loaded run from cache");
                return Ok(RunResponse {
                    run_id,
                    loaded_from_cache: true,
                    trajectory,
                    timing,
                });
            }
            Err(e) => warn!(run_id = %run_id, error = %e, "cached run unreadable, recomputing"),
        }
    }

    let solve = Timer::start("integrate trajectory");
    let trajectory = integrate_with(&request.params, &request.options.integrate)?;
    timing.solve_time_s = solve.stop();
    timing.steps = trajectory.len().saturating_sub(1);

    let save = Timer::start("save run");
    let records = records_from_trajectory(&trajectory);
    let manifest = RunManifest {
        run_id: run_id.clone(),
        project_name: request.project_name.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        parameters: request.params,
        max_steps,
        engine_version: ENGINE_VERSION.to_string(),
        samples: records.len(),
    };
    store.save_run(&manifest, &records)?;
    timing.save_time_s = save.stop();
    timing.total_time_s = total.stop();

    Ok(RunResponse {
        run_id,
        loaded_from_cache: false,
        trajectory,
        timing,
    })
}

pub fn list_runs(project_path: &Path) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.list_runs()?)
}

pub fn load_run(project_path: &Path, run_id: &str) -> AppResult<(RunManifest, Trajectory)> {
    let store = RunStore::for_project(project_path)?;
    let manifest = store.load_manifest(run_id)?;
    let records = store.load_trajectory(run_id)?;
    Ok((manifest, trajectory_from_records(&records)))
}
