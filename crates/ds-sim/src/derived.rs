//! Derived quantities: natural frequency, damping ratio and friends.

use ds_core::{AngularVelocity, Ratio, Time, Tolerances, nearly_equal};

use crate::params::Parameters;

/// Qualitative behaviour of the free response, from the damping ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DampingRegime {
    /// ζ = 0
    Undamped,
    /// 0 < ζ < 1
    Underdamped,
    /// ζ = 1 (within tolerance)
    CriticallyDamped,
    /// ζ > 1
    Overdamped,
}

impl DampingRegime {
    pub fn label(&self) -> &'static str {
        match self {
            DampingRegime::Undamped => "undamped",
            DampingRegime::Underdamped => "underdamped",
            DampingRegime::CriticallyDamped => "critically damped",
            DampingRegime::Overdamped => "overdamped",
        }
    }
}

/// Quantities computed from [`Parameters`]. Cheap; recompute instead of caching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedQuantities {
    /// Natural frequency ωn = sqrt(k/m) (rad/s)
    pub omega_n: f64,
    /// Damping ratio ζ = c / (2·sqrt(k·m))
    pub damping_ratio: f64,
}

/// Compute derived quantities of a validated parameter set.
pub fn derive(p: &Parameters) -> DerivedQuantities {
    DerivedQuantities::from_coefficients(p.m, p.c, p.k)
}

impl DerivedQuantities {
    pub fn from_coefficients(m: f64, c: f64, k: f64) -> Self {
        Self {
            omega_n: (k / m).sqrt(),
            damping_ratio: c / (2.0 * (k * m).sqrt()),
        }
    }

    pub fn regime(&self) -> DampingRegime {
        let tol = Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        };
        if self.damping_ratio == 0.0 {
            DampingRegime::Undamped
        } else if nearly_equal(self.damping_ratio, 1.0, tol) {
            DampingRegime::CriticallyDamped
        } else if self.damping_ratio < 1.0 {
            DampingRegime::Underdamped
        } else {
            DampingRegime::Overdamped
        }
    }

    /// Damped natural frequency ωd = ωn·sqrt(1 - ζ²); `None` unless oscillatory.
    pub fn damped_frequency(&self) -> Option<f64> {
        match self.regime() {
            DampingRegime::Undamped | DampingRegime::Underdamped => {
                Some(self.omega_n * (1.0 - self.damping_ratio * self.damping_ratio).sqrt())
            }
            _ => None,
        }
    }

    /// Period of the damped oscillation 2π/ωd (s).
    pub fn damped_period(&self) -> Option<f64> {
        self.damped_frequency()
            .map(|omega_d| std::f64::consts::TAU / omega_d)
    }

    /// Exponential envelope rate ζ·ωn (1/s).
    pub fn decay_rate(&self) -> f64 {
        self.damping_ratio * self.omega_n
    }

    /// Time for the envelope `e^(-ζ·ωn·t)` to fall to `fraction` of its start.
    ///
    /// `None` without damping or for a fraction outside (0, 1).
    pub fn settling_time(&self, fraction: f64) -> Option<f64> {
        let rate = self.decay_rate();
        if rate.is_nan() || rate <= 0.0 || fraction.is_nan() || fraction <= 0.0 || fraction >= 1.0
        {
            return None;
        }
        let t = -fraction.ln() / rate;
        t.is_finite().then_some(t)
    }

    pub fn natural_frequency(&self) -> AngularVelocity {
        ds_core::rad_per_s(self.omega_n)
    }

    pub fn ratio(&self) -> Ratio {
        ds_core::unitless(self.damping_ratio)
    }

    pub fn period(&self) -> Option<Time> {
        self.damped_period().map(ds_core::s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario() {
        let d = derive(&Parameters::default());
        assert!((d.omega_n - 2.0).abs() < 1e-12);
        assert!((d.damping_ratio - 0.05).abs() < 1e-12);
        assert_eq!(d.regime(), DampingRegime::Underdamped);
    }

    #[test]
    fn zero_damping_gives_zero_ratio() {
        let d = DerivedQuantities::from_coefficients(1.0, 0.0, 4.0);
        assert_eq!(d.damping_ratio, 0.0);
        assert_eq!(d.regime(), DampingRegime::Undamped);
        assert!((d.damped_period().unwrap() - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(d.settling_time(0.01), None);
    }

    #[test]
    fn critical_and_over_damping() {
        // c = 2·sqrt(k·m) = 4
        let critical = DerivedQuantities::from_coefficients(1.0, 4.0, 4.0);
        assert_eq!(critical.regime(), DampingRegime::CriticallyDamped);
        assert_eq!(critical.damped_frequency(), None);

        let over = DerivedQuantities::from_coefficients(1.0, 10.0, 4.0);
        assert_eq!(over.regime(), DampingRegime::Overdamped);
        assert_eq!(over.period(), None);
    }

    #[test]
    fn settling_time_for_one_percent() {
        // ζ·ωn = c / 2m = 0.1
        let d = derive(&Parameters::default());
        let t = d.settling_time(0.01).unwrap();
        assert!((t - 100.0_f64.ln() / 0.1).abs() < 1e-9);
        assert_eq!(d.settling_time(0.0), None);
        assert_eq!(d.settling_time(1.5), None);
    }
}
