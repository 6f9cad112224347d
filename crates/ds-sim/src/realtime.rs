//! Real-time stepping for live animation.
//!
//! One [`SimulationState`] per session, advanced once per rendered frame with
//! semi-implicit Euler. This is deliberately a different (cheaper, first-order)
//! rule than the Heun integrator used for the offline trajectory.
//!
//! Single-writer rule: only the stepper and the reset/toggle functions here
//! mutate the state. Readers observe it after the tick for the current frame
//! has completed.

use tracing::info;

use crate::error::{SimError, SimResult};
use crate::params::Parameters;

/// Smallest simulated step per frame (s).
pub const DT_MIN: f64 = 1.0 / 120.0;
/// Largest simulated step per frame (s).
pub const DT_MAX: f64 = 1.0 / 30.0;

/// Live animation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationState {
    /// Current displacement (m)
    pub x: f64,
    /// Current velocity (m/s)
    pub v: f64,
    /// Elapsed simulation time (s); may overshoot `duration` by one step
    pub t: f64,
    /// Run flag
    pub playing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

impl SimulationState {
    pub fn phase(&self) -> Phase {
        if self.playing {
            Phase::Running
        } else {
            Phase::Idle
        }
    }
}

/// Fresh state seeded from `y0`/`v0` at `t = 0`.
pub fn reset_state(p: &Parameters, resume: bool) -> SimulationState {
    SimulationState {
        x: p.y0,
        v: p.v0,
        t: 0.0,
        playing: resume,
    }
}

/// Play/pause.
pub fn toggle_playing(state: &mut SimulationState) {
    state.playing = !state.playing;
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// Not playing; state untouched.
    Paused,
    /// Advanced by `dt` seconds of simulated time.
    Advanced { dt: f64 },
    /// Advanced by `dt` and reached the horizon; now Idle.
    Finished { dt: f64 },
}

/// Frame-rate independent stepper with bounded per-frame step.
#[derive(Clone, Debug)]
pub struct RealTimeStepper {
    dt_min: f64,
    dt_max: f64,
}

impl Default for RealTimeStepper {
    fn default() -> Self {
        Self {
            dt_min: DT_MIN,
            dt_max: DT_MAX,
        }
    }
}

impl RealTimeStepper {
    /// Create a stepper with custom step bounds.
    pub fn new(dt_min: f64, dt_max: f64) -> SimResult<Self> {
        if !(dt_min.is_finite() && dt_min > 0.0) {
            return Err(SimError::precondition("dt_min must be positive and finite"));
        }
        if !(dt_max.is_finite() && dt_max >= dt_min) {
            return Err(SimError::precondition("dt_max must be finite and >= dt_min"));
        }
        Ok(Self { dt_min, dt_max })
    }

    pub fn dt_min(&self) -> f64 {
        self.dt_min
    }

    pub fn dt_max(&self) -> f64 {
        self.dt_max
    }

    /// Map wall-clock frame time to a simulated step.
    ///
    /// Stalls are capped at `dt_max`; a NaN frame time counts as `dt_min`.
    pub fn clamp_dt(&self, elapsed: f64) -> f64 {
        if elapsed.is_nan() {
            return self.dt_min;
        }
        elapsed.clamp(self.dt_min, self.dt_max)
    }

    /// Advance `state` by one frame.
    ///
    /// Velocity is updated first and the new velocity moves the position
    /// (semi-implicit Euler). Time is not clamped to `duration`, so `t` can end
    /// up to one step past the horizon when playback latches to Idle.
    pub fn step(&self, state: &mut SimulationState, p: &Parameters, elapsed: f64) -> StepOutcome {
        if !state.playing {
            return StepOutcome::Paused;
        }

        let dt = self.clamp_dt(elapsed);
        let accel = -(p.c / p.m) * state.v - (p.k / p.m) * state.x;
        state.v += accel * dt;
        state.x += state.v * dt;
        state.t += dt;

        if state.t >= p.duration {
            state.playing = false;
            info!(t = state.t, duration = p.duration, "playback reached horizon");
            return StepOutcome::Finished { dt };
        }
        StepOutcome::Advanced { dt }
    }
}

/// Advance `state` by one frame with the default step bounds.
pub fn step(state: &mut SimulationState, p: &Parameters, elapsed: f64) -> StepOutcome {
    RealTimeStepper::default().step(state, p, elapsed)
}
