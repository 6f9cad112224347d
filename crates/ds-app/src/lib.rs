//! Shared application service layer for dampsim.
//!
//! Front-ends (CLI, or a browser bridge) go through this crate for project
//! loading, the interactive session, cached runs and response summaries.

pub mod error;
pub mod project_service;
pub mod query;
pub mod run_service;
pub mod session;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use project_service::{load_project, resolve_parameters, session_from_project};
pub use query::{ResponseSummary, summarize};
pub use run_service::{
    ENGINE_VERSION, RunOptions, RunRequest, RunResponse, RunTimingSummary, ensure_run, list_runs,
    load_run,
};
pub use session::{FrameSnapshot, Session, SessionConfig};
