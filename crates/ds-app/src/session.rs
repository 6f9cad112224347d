//! Interactive session: the active parameters, their trajectory and the live
//! animation state.
//!
//! The session is the only writer of its [`SimulationState`]. Readers take a
//! [`FrameSnapshot`] after `tick` returns for the frame.

use ds_sim::{
    DerivedQuantities, IntegrateOptions, Parameters, RawParameters, RealTimeStepper,
    SimulationState, StepOutcome, Trajectory, derive, integrate_with, reset_state, toggle_playing,
    validate,
};
use tracing::debug;

use crate::AppResult;

#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    pub stepper: RealTimeStepper,
    pub integrate: IntegrateOptions,
}

/// What a renderer reads once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub x: f64,
    pub v: f64,
    pub t: f64,
    pub playing: bool,
    /// `x · scale`, for placing the mass on screen
    pub display_offset: f64,
}

#[derive(Debug)]
pub struct Session {
    params: Parameters,
    state: SimulationState,
    trajectory: Trajectory,
    config: SessionConfig,
}

impl Session {
    /// Start Idle at the initial condition of `params`.
    pub fn new(params: Parameters, config: SessionConfig) -> AppResult<Self> {
        params.check()?;
        let trajectory = integrate_with(&params, &config.integrate)?;
        Ok(Self {
            state: reset_state(&params, false),
            params,
            trajectory,
            config,
        })
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn derived(&self) -> DerivedQuantities {
        derive(&self.params)
    }

    /// Validate and install a new parameter set, all or nothing.
    ///
    /// On success the trajectory is regenerated and the state re-seeded (Idle).
    /// On failure nothing observable changes.
    pub fn apply(&mut self, raw: &RawParameters) -> AppResult<&Trajectory> {
        let params = validate(raw, &self.params)?;
        let trajectory = integrate_with(&params, &self.config.integrate)?;

        debug!(?params, samples = trajectory.len(), "applied parameters");
        self.params = params;
        self.trajectory = trajectory;
        self.state = reset_state(&self.params, false);
        Ok(&self.trajectory)
    }

    /// Re-seed from the active parameters. The trajectory is kept: integration
    /// is deterministic, so regenerating it would give the same arrays.
    pub fn reset(&mut self, resume: bool) {
        self.state = reset_state(&self.params, resume);
    }

    pub fn toggle_playing(&mut self) {
        toggle_playing(&mut self.state);
    }

    /// Advance the animation by one frame of `elapsed` wall-clock seconds.
    pub fn tick(&mut self, elapsed: f64) -> StepOutcome {
        self.config
            .stepper
            .step(&mut self.state, &self.params, elapsed)
    }

    pub fn frame(&self) -> FrameSnapshot {
        FrameSnapshot {
            x: self.state.x,
            v: self.state.v,
            t: self.state.t,
            playing: self.state.playing,
            display_offset: self.state.x * self.params.scale,
        }
    }
}
