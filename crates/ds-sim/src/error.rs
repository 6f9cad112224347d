//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while integrating or stepping the oscillator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Caller broke a contract the parameter model should already enforce.
    #[error("Precondition violated: {what}")]
    Precondition { what: String },

    #[error("Step limit exceeded: {requested} steps requested, cap is {max_steps}")]
    StepLimit { requested: u64, max_steps: usize },
}

impl SimError {
    pub(crate) fn precondition(what: impl Into<String>) -> Self {
        SimError::Precondition { what: what.into() }
    }
}

pub type SimResult<T> = Result<T, SimError>;
