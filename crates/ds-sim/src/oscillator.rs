//! Mass-spring-damper in first-order (state-space) form.

use crate::model::TransientModel;
use crate::params::Parameters;

/// Phase-space point: displacement and velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseState {
    /// Displacement (m)
    pub x: f64,
    /// Velocity (m/s)
    pub v: f64,
}

/// Unforced single-degree-of-freedom oscillator.
///
/// ```text
/// m·x'' + c·x' + k·x = 0
/// ```
///
/// written as `x' = v`, `v' = a(x, v) = -(c·v + k·x) / m`.
#[derive(Clone, Debug)]
pub struct DampedOscillator {
    /// Mass (kg)
    pub m: f64,
    /// Damping coefficient (N·s/m)
    pub c: f64,
    /// Spring stiffness (N/m)
    pub k: f64,
    /// Initial condition
    pub initial: PhaseState,
}

impl DampedOscillator {
    pub fn from_parameters(p: &Parameters) -> Self {
        Self {
            m: p.m,
            c: p.c,
            k: p.k,
            initial: PhaseState { x: p.y0, v: p.v0 },
        }
    }

    /// Acceleration from the spring and damper forces.
    #[inline]
    pub fn acceleration(&self, x: f64, v: f64) -> f64 {
        -(self.c * v + self.k * x) / self.m
    }

    /// Mechanical energy `½·m·v² + ½·k·x²` (J).
    pub fn energy(&self, state: &PhaseState) -> f64 {
        0.5 * self.m * state.v * state.v + 0.5 * self.k * state.x * state.x
    }
}

impl TransientModel for DampedOscillator {
    type State = PhaseState;

    fn initial_state(&self) -> PhaseState {
        self.initial
    }

    fn rhs(&self, _t: f64, s: &PhaseState) -> PhaseState {
        PhaseState {
            x: s.v,
            v: self.acceleration(s.x, s.v),
        }
    }

    fn add(&self, a: &PhaseState, b: &PhaseState) -> PhaseState {
        PhaseState {
            x: a.x + b.x,
            v: a.v + b.v,
        }
    }

    fn scale(&self, a: &PhaseState, scale: f64) -> PhaseState {
        PhaseState {
            x: a.x * scale,
            v: a.v * scale,
        }
    }
}
