//! Error types for the ds-app service layer.

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for front-ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    /// Rejected parameter set; keeps the field name for the caller.
    #[error("{0}")]
    Parameter(ds_sim::ValidationError),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ds-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<ds_sim::ValidationError> for AppError {
    fn from(err: ds_sim::ValidationError) -> Self {
        AppError::Parameter(err)
    }
}

impl From<ds_sim::SimError> for AppError {
    fn from(err: ds_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<ds_project::ProjectError> for AppError {
    fn from(err: ds_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<ds_results::ResultsError> for AppError {
    fn from(err: ds_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
