//! ds-core: numeric foundation for dampsim.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float checks)
//! - error (shared error type for scalar checks)
//! - timing (wall-clock timer for run reports)

pub mod error;
pub mod numeric;
pub mod timing;
pub mod units;

pub use error::{DsError, DsResult};
pub use numeric::*;
pub use timing::Timer;
pub use units::*;
