//! Integration test: live stepping state machine and its agreement with the
//! offline trajectory.

use ds_sim::{
    DT_MAX, Parameters, Phase, RealTimeStepper, StepOutcome, integrate, reset_state, step,
    toggle_playing,
};

fn spring() -> Parameters {
    Parameters {
        m: 1.0,
        c: 0.0,
        k: 4.0,
        y0: 1.0,
        v0: 0.0,
        duration: 2.0,
        dt: 0.004,
        scale: 1.0,
    }
}

#[test]
fn first_step_moves_toward_equilibrium() {
    let p = spring();
    let mut state = reset_state(&p, true);
    step(&mut state, &p, 1.0 / 60.0);
    assert!(state.v < 0.0, "restoring force pulls back");
    assert!(state.x < 1.0);
}

#[test]
fn idle_running_cycle() {
    let p = spring();
    let mut state = reset_state(&p, false);
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(step(&mut state, &p, 0.016), StepOutcome::Paused);

    toggle_playing(&mut state);
    let mut finished = false;
    for _ in 0..1000 {
        match step(&mut state, &p, 0.016) {
            StepOutcome::Finished { .. } => {
                finished = true;
                break;
            }
            StepOutcome::Advanced { .. } => {}
            StepOutcome::Paused => panic!("paused while running"),
        }
    }
    assert!(finished);
    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.t >= p.duration);

    let frozen = state;
    step(&mut state, &p, 0.016);
    assert_eq!(state, frozen);

    // Reset with resume returns to Running from the initial condition.
    state = reset_state(&p, true);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!((state.x, state.v, state.t), (1.0, 0.0, 0.0));
}

#[test]
fn stalled_frames_are_capped() {
    let p = spring();
    let mut state = reset_state(&p, true);
    let outcome = RealTimeStepper::default().step(&mut state, &p, 2.5);
    assert_eq!(outcome, StepOutcome::Advanced { dt: DT_MAX });
    assert_eq!(state.t, DT_MAX);
}

#[test]
fn live_playback_tracks_offline_trajectory() {
    let p = spring();
    let traj = integrate(&p).unwrap();
    let mut state = reset_state(&p, true);
    let frame = 1.0 / 120.0;
    while state.t < 1.0 {
        step(&mut state, &p, frame);
    }
    let idx = traj
        .times
        .iter()
        .position(|&t| t >= state.t)
        .unwrap();
    assert!((traj.xs[idx] - state.x).abs() < 0.05);
}
