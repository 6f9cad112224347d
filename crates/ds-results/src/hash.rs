//! Content-based hashing for run IDs.

use ds_sim::Parameters;
use sha2::{Digest, Sha256};

pub fn compute_run_id(params: &Parameters, max_steps: usize, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let params_json = serde_json::to_string(params).unwrap_or_default();
    hasher.update(params_json.as_bytes());

    hasher.update(max_steps.to_le_bytes());
    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
