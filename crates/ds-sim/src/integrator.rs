//! Fixed-step time integrators.

use crate::model::TransientModel;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the transient model.
    fn step<M: TransientModel>(&self, model: &M, t: f64, x: &M::State, dt: f64) -> M::State;
}

/// Heun's method (improved Euler, explicit 2nd-order predictor-corrector).
///
/// ```text
/// k1 = f(t, x)
/// x* = x + dt·k1
/// k2 = f(t + dt, x*)
/// x_next = x + dt·½·(k1 + k2)
/// ```
///
/// For the oscillator `k1 = (v, a1)` and `k2 = (v*, a2)`, so the position update
/// averages the current and predicted velocities and the velocity update
/// averages the two accelerations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heun;

impl Integrator for Heun {
    fn step<M: TransientModel>(&self, model: &M, t: f64, x: &M::State, dt: f64) -> M::State {
        let k1 = model.rhs(t, x);
        let predicted = model.add(x, &model.scale(&k1, dt));
        let k2 = model.rhs(t + dt, &predicted);

        let k_sum = model.add(&k1, &k2);
        model.add(x, &model.scale(&k_sum, dt * 0.5))
    }
}
