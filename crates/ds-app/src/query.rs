//! Summaries of a computed response.

use ds_sim::Trajectory;
use ds_sim::analysis::{envelope_non_increasing, local_extrema, mean_period, zero_crossings};

#[derive(Debug, Clone)]
pub struct ResponseSummary {
    pub samples: usize,
    pub time_range: (f64, f64),
    pub final_x: f64,
    pub final_v: f64,
    pub peak_abs_x: f64,
    pub zero_crossings: usize,
    pub first_zero_crossing: Option<f64>,
    /// Mean spacing of displacement maxima (s)
    pub mean_period: Option<f64>,
    /// |x| at successive extrema never grows
    pub envelope_decays: bool,
}

pub fn summarize(traj: &Trajectory) -> ResponseSummary {
    let (t_end, final_x, final_v) = traj.last().unwrap_or((0.0, 0.0, 0.0));
    let crossings = zero_crossings(&traj.times, &traj.xs);
    let extrema = local_extrema(&traj.times, &traj.xs);

    ResponseSummary {
        samples: traj.len(),
        time_range: (traj.times.first().copied().unwrap_or(0.0), t_end),
        final_x,
        final_v,
        peak_abs_x: traj.xs.iter().fold(0.0, |acc: f64, x| acc.max(x.abs())),
        zero_crossings: crossings.len(),
        first_zero_crossing: crossings.first().copied(),
        mean_period: mean_period(&traj.times, &traj.xs),
        envelope_decays: envelope_non_increasing(&extrema),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_sim::{Parameters, integrate};

    #[test]
    fn reference_summary() {
        let traj = integrate(&Parameters::default()).unwrap();
        let s = summarize(&traj);
        assert_eq!(s.samples, 2501);
        assert_eq!(s.time_range, (0.0, 10.0));
        assert_eq!(s.peak_abs_x, 1.0);
        assert!(s.envelope_decays);
        assert!(s.zero_crossings >= 5);
        let period = s.mean_period.unwrap();
        assert!((period - std::f64::consts::PI).abs() < 0.05);
    }

    #[test]
    fn empty_trajectory_summary() {
        let traj = Trajectory {
            times: vec![],
            xs: vec![],
            vs: vec![],
        };
        let s = summarize(&traj);
        assert_eq!(s.samples, 0);
        assert_eq!(s.mean_period, None);
        assert!(s.envelope_decays);
    }
}
