//! Integration test: offline trajectory of the reference and undamped scenarios.
//!
//! Checks:
//! - Reference parameters give ωn = 2 rad/s, ζ = 0.05, 2501 samples
//! - Decaying oscillation with the first zero crossing near π/(2·ωn)
//! - Peak envelope never grows with damping
//! - Undamped period matches 2π/ωn within 1%

use ds_sim::analysis::{
    ExtremumKind, envelope_non_increasing, local_extrema, mean_period, zero_crossings,
};
use ds_sim::{DampedOscillator, Parameters, PhaseState, derive, integrate};

fn reference() -> Parameters {
    Parameters {
        m: 1.0,
        c: 0.2,
        k: 4.0,
        y0: 1.0,
        v0: 0.0,
        duration: 10.0,
        dt: 0.004,
        scale: 1.0,
    }
}

#[test]
fn reference_scenario_shape() {
    let p = reference();
    let d = derive(&p);
    assert!((d.omega_n - 2.0).abs() < 1e-12);
    assert!((d.damping_ratio - 0.05).abs() < 1e-12);

    let traj = integrate(&p).unwrap();
    assert_eq!(traj.len(), 2501);
    assert_eq!(traj.xs.len(), 2501);
    assert_eq!(traj.vs.len(), 2501);
    assert_eq!(traj.xs[0], 1.0);
    assert_eq!(traj.vs[0], 0.0);
    assert_eq!(traj.times[0], 0.0);
    assert_eq!(traj.times[2500], 10.0);

    let crossings = zero_crossings(&traj.times, &traj.xs);
    let quarter_period = std::f64::consts::PI / (2.0 * d.omega_n);
    assert!(
        (crossings[0] - quarter_period).abs() < 0.05,
        "first crossing at {}",
        crossings[0]
    );
    // Roughly 2 crossings per period of π s over 10 s.
    assert!(crossings.len() >= 5);
}

#[test]
fn damped_envelope_decays() {
    let traj = integrate(&reference()).unwrap();
    let extrema = local_extrema(&traj.times, &traj.xs);
    assert!(extrema.len() >= 5);
    assert!(envelope_non_increasing(&extrema));

    let last = extrema.last().unwrap();
    assert!(last.value.abs() < 0.5);
}

#[test]
fn damped_energy_decreases_over_horizon() {
    let p = reference();
    let osc = DampedOscillator::from_parameters(&p);
    let traj = integrate(&p).unwrap();
    let (_, x_end, v_end) = traj.last().unwrap();
    let e0 = osc.energy(&PhaseState { x: p.y0, v: p.v0 });
    let e_end = osc.energy(&PhaseState { x: x_end, v: v_end });
    assert!(e_end < e0);
}

#[test]
fn undamped_period_matches_natural_frequency() {
    let p = Parameters {
        c: 0.0,
        dt: 0.005,
        duration: 20.0,
        ..reference()
    };
    let d = derive(&p);
    let expected = std::f64::consts::TAU / d.omega_n;
    assert!(p.dt <= 0.01 * expected);

    let traj = integrate(&p).unwrap();
    let period = mean_period(&traj.times, &traj.xs).unwrap();
    let rel_err = (period - expected).abs() / expected;
    assert!(rel_err < 0.01, "period {period} vs {expected}");

    let maxima = local_extrema(&traj.times, &traj.xs)
        .into_iter()
        .filter(|e| e.kind == ExtremumKind::Maximum)
        .count();
    assert!(maxima >= 5);
}

#[test]
fn integration_is_deterministic() {
    let p = reference();
    assert_eq!(integrate(&p).unwrap(), integrate(&p).unwrap());
}
