//! Result data types.

use ds_sim::Parameters;
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub project_name: String,
    pub timestamp: String,
    pub parameters: Parameters,
    pub max_steps: usize,
    pub engine_version: String,
    pub samples: usize,
}

/// One line of `trajectory.jsonl`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryRecord {
    pub time_s: f64,
    pub x_m: f64,
    pub v_m_s: f64,
}
