//! Offline full-horizon trajectory integration.

use tracing::{debug, warn};

use crate::error::{SimError, SimResult};
use crate::integrator::{Heun, Integrator};
use crate::model::TransientModel;
use crate::oscillator::DampedOscillator;
use crate::params::Parameters;

/// Default upper bound on `ceil(duration / dt)`.
pub const DEFAULT_MAX_STEPS: usize = 2_000_000;

/// Options for trajectory integration.
#[derive(Clone, Debug)]
pub struct IntegrateOptions {
    /// Maximum number of steps (safety limit against tiny dt / huge horizons)
    pub max_steps: usize,
}

impl Default for IntegrateOptions {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Dense time series of the free response. All three vectors have equal length.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// Time stamps (s)
    pub times: Vec<f64>,
    /// Displacement (m)
    pub xs: Vec<f64>,
    /// Velocity (m/s)
    pub vs: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate `(t, x, v)` samples in time order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.times
            .iter()
            .zip(&self.xs)
            .zip(&self.vs)
            .map(|((&t, &x), &v)| (t, x, v))
    }

    pub fn last(&self) -> Option<(f64, f64, f64)> {
        let i = self.len().checked_sub(1)?;
        Some((self.times[i], self.xs[i], self.vs[i]))
    }
}

/// Number of integration steps: `max(1, ceil(duration / dt))`.
pub fn step_count(duration: f64, dt: f64, max_steps: usize) -> SimResult<usize> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimError::precondition("dt must be positive and finite"));
    }
    if !(duration.is_finite() && duration > 0.0) {
        return Err(SimError::precondition("duration must be positive and finite"));
    }
    if max_steps == 0 {
        return Err(SimError::precondition("max_steps must be positive"));
    }

    let raw = (duration / dt).ceil().max(1.0);
    if raw > max_steps as f64 {
        warn!(duration, dt, requested = raw, max_steps, "step cap exceeded");
        return Err(SimError::StepLimit {
            requested: raw as u64,
            max_steps,
        });
    }
    Ok(raw as usize)
}

/// Integrate the full horizon with default options.
pub fn integrate(p: &Parameters) -> SimResult<Trajectory> {
    integrate_with(p, &IntegrateOptions::default())
}

/// Integrate `m·x'' + c·x' + k·x = 0` from `(y0, v0)` over `[0, duration]` with Heun's method.
///
/// Every step uses the full `dt`, but the reported time stamp of sample `i`
/// is `min(i·dt, duration)` and the final sample is labelled exactly `duration`.
/// When `duration` is not a multiple of `dt` the last state was still advanced
/// by a full step; only its label is clamped.
///
/// A record that does not satisfy [`Parameters::check`] is rejected with
/// [`SimError::Precondition`] naming the offending field.
pub fn integrate_with(p: &Parameters, opts: &IntegrateOptions) -> SimResult<Trajectory> {
    p.check().map_err(|err| SimError::precondition(err.to_string()))?;
    let h = p.dt;
    let steps = step_count(p.duration, h, opts.max_steps)?;
    debug!(steps, dt = h, duration = p.duration, "integrating trajectory");

    let model = DampedOscillator::from_parameters(p);
    let integrator = Heun;

    let mut times = Vec::with_capacity(steps + 1);
    let mut xs = Vec::with_capacity(steps + 1);
    let mut vs = Vec::with_capacity(steps + 1);

    let mut state = model.initial_state();
    times.push(0.0);
    xs.push(state.x);
    vs.push(state.v);

    for i in 0..steps {
        let t = i as f64 * h;
        state = integrator.step(&model, t, &state, h);
        let label = if i + 1 == steps {
            p.duration
        } else {
            ((i + 1) as f64 * h).min(p.duration)
        };
        times.push(label);
        xs.push(state.x);
        vs.push(state.v);
    }

    Ok(Trajectory { times, xs, vs })
}
