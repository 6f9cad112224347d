//! Conversions between trajectories, stored records and CSV.

use ds_sim::Trajectory;

use crate::types::TrajectoryRecord;

pub fn records_from_trajectory(traj: &Trajectory) -> Vec<TrajectoryRecord> {
    traj.samples()
        .map(|(time_s, x_m, v_m_s)| TrajectoryRecord {
            time_s,
            x_m,
            v_m_s,
        })
        .collect()
}

pub fn trajectory_from_records(records: &[TrajectoryRecord]) -> Trajectory {
    Trajectory {
        times: records.iter().map(|r| r.time_s).collect(),
        xs: records.iter().map(|r| r.x_m).collect(),
        vs: records.iter().map(|r| r.v_m_s).collect(),
    }
}

/// CSV with header `time_s,x_m,v_m_s`.
pub fn trajectory_to_csv(traj: &Trajectory) -> String {
    let mut csv = String::from("time_s,x_m,v_m_s\n");
    for (t, x, v) in traj.samples() {
        csv.push_str(&format!("{},{},{}\n", t, x, v));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Trajectory {
        Trajectory {
            times: vec![0.0, 0.5],
            xs: vec![1.0, 0.75],
            vs: vec![0.0, -1.0],
        }
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = trajectory_to_csv(&tiny());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["time_s,x_m,v_m_s", "0,1,0", "0.5,0.75,-1"]);
    }

    #[test]
    fn records_preserve_samples() {
        let traj = tiny();
        let back = trajectory_from_records(&records_from_trajectory(&traj));
        assert_eq!(back, traj);
    }
}
