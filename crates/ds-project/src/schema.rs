//! Project schema definitions.

use ds_core::DsError;
use ds_sim::{
    DEFAULT_MAX_STEPS, DT_MAX, DT_MIN, DerivedQuantities, IntegrateOptions, Parameters,
    RealTimeStepper, SimResult,
};
use serde::{Deserialize, Serialize};

/// Envelope fraction used to pick a horizon when none is given.
pub const SETTLING_FRACTION: f64 = 0.01;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectFile {
    pub version: u32,
    pub name: String,
    pub parameters: ParametersDef,
    #[serde(default)]
    pub animation: AnimationDef,
    #[serde(default)]
    pub limits: LimitsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParametersDef {
    pub m: f64,
    pub c: f64,
    pub k: f64,
    pub y0: f64,
    pub v0: f64,
    /// Horizon (s). Omitted: time for the envelope to decay to 1%.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub dt: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationDef {
    pub dt_min: f64,
    pub dt_max: f64,
}

impl Default for AnimationDef {
    fn default() -> Self {
        Self {
            dt_min: DT_MIN,
            dt_max: DT_MAX,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitsDef {
    pub max_steps: usize,
}

impl Default for LimitsDef {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl ParametersDef {
    /// Horizon as written, or the 1% settling estimate.
    pub fn resolved_duration(&self) -> Option<f64> {
        self.duration.or_else(|| {
            DerivedQuantities::from_coefficients(self.m, self.c, self.k)
                .settling_time(SETTLING_FRACTION)
        })
    }

    /// Build a checked parameter record.
    pub fn resolve(&self) -> Result<Parameters, ds_sim::ValidationError> {
        let duration = self
            .resolved_duration()
            .ok_or(DsError::Missing { what: "duration" })?;
        let p = Parameters {
            m: self.m,
            c: self.c,
            k: self.k,
            y0: self.y0,
            v0: self.v0,
            duration,
            dt: self.dt,
            scale: self.scale,
        };
        p.check()?;
        Ok(p)
    }
}

impl From<&Parameters> for ParametersDef {
    fn from(p: &Parameters) -> Self {
        Self {
            m: p.m,
            c: p.c,
            k: p.k,
            y0: p.y0,
            v0: p.v0,
            duration: Some(p.duration),
            dt: p.dt,
            scale: p.scale,
        }
    }
}

impl ProjectFile {
    pub fn new(name: impl Into<String>, parameters: &Parameters) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            parameters: parameters.into(),
            animation: AnimationDef::default(),
            limits: LimitsDef::default(),
        }
    }

    pub fn parameters(&self) -> Result<Parameters, ds_sim::ValidationError> {
        self.parameters.resolve()
    }

    pub fn stepper(&self) -> SimResult<RealTimeStepper> {
        RealTimeStepper::new(self.animation.dt_min, self.animation.dt_max)
    }

    pub fn integrate_options(&self) -> IntegrateOptions {
        IntegrateOptions {
            max_steps: self.limits.max_steps,
        }
    }
}
