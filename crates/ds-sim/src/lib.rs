//! Damped harmonic oscillator simulation engine.
//!
//! Provides:
//! - Parameter validation with field-level errors
//! - Derived quantities (natural frequency, damping ratio, regime)
//! - Offline full-horizon trajectory integration (Heun)
//! - Real-time per-frame stepping (semi-implicit Euler) with play/pause/reset
//! - Response analysis helpers (extrema, zero crossings, period)

pub mod analysis;
pub mod derived;
pub mod error;
pub mod integrator;
pub mod model;
pub mod oscillator;
pub mod params;
pub mod realtime;
pub mod trajectory;

// Re-exports for public API
pub use derived::{DampingRegime, DerivedQuantities, derive};
pub use error::{SimError, SimResult};
pub use integrator::{Heun, Integrator};
pub use model::TransientModel;
pub use oscillator::{DampedOscillator, PhaseState};
pub use params::{EDITABLE_FIELDS, Parameters, RawParameters, ValidationError, validate};
pub use realtime::{
    DT_MAX, DT_MIN, Phase, RealTimeStepper, SimulationState, StepOutcome, reset_state, step,
    toggle_playing,
};
pub use trajectory::{
    DEFAULT_MAX_STEPS, IntegrateOptions, Trajectory, integrate, integrate_with, step_count,
};
