use thiserror::Error;

pub type DsResult<T> = Result<T, DsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DsError {
    #[error("Missing value for {what}")]
    Missing { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be strictly positive (got {value})")]
    NotPositive { what: &'static str, value: f64 },

    #[error("{what} must be non-negative (got {value})")]
    Negative { what: &'static str, value: f64 },
}

impl DsError {
    /// Name of the quantity that failed the check.
    pub fn what(&self) -> &'static str {
        match self {
            DsError::Missing { what }
            | DsError::NonFinite { what, .. }
            | DsError::NotPositive { what, .. }
            | DsError::Negative { what, .. } => what,
        }
    }
}
