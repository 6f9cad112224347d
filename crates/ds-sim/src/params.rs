//! Parameter model: validated physical inputs of the oscillator.

use std::collections::BTreeMap;

use ds_core::{
    DsError, Length, Mass, Time, Velocity, ensure_finite, ensure_non_negative, ensure_positive,
};
use thiserror::Error;

/// Raw user input, keyed by parameter name.
pub type RawParameters = BTreeMap<String, f64>;

/// Fields accepted by [`validate`]. `dt` and `scale` are not user-editable and
/// are carried over from the active configuration.
pub const EDITABLE_FIELDS: [&str; 6] = ["m", "c", "k", "y0", "v0", "duration"];

/// A parameter failed validation. Always names the offending field.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid parameter: {0}")]
pub struct ValidationError(#[from] DsError);

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        self.0.what()
    }

    /// The violated constraint.
    pub fn kind(&self) -> &DsError {
        &self.0
    }
}

/// Physical inputs of a single simulation.
///
/// Replaced wholesale on every apply; never mutated field by field once active.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Mass (kg), > 0
    pub m: f64,
    /// Damping coefficient (N·s/m), >= 0
    pub c: f64,
    /// Spring stiffness (N/m), > 0
    pub k: f64,
    /// Initial displacement (m)
    pub y0: f64,
    /// Initial velocity (m/s)
    pub v0: f64,
    /// Simulation horizon (s), > 0
    pub duration: f64,
    /// Offline integration step (s), > 0
    pub dt: f64,
    /// Display-only scale factor
    pub scale: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
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
}

impl Parameters {
    /// Check every invariant, including the carried-over `dt` and `scale`.
    pub fn check(&self) -> Result<(), ValidationError> {
        ensure_positive(self.m, "m")?;
        ensure_non_negative(self.c, "c")?;
        ensure_positive(self.k, "k")?;
        ensure_finite(self.y0, "y0")?;
        ensure_finite(self.v0, "v0")?;
        ensure_positive(self.duration, "duration")?;
        ensure_positive(self.dt, "dt")?;
        ensure_finite(self.scale, "scale")?;
        Ok(())
    }

    /// Editable fields as a raw map, e.g. to pre-fill an input form.
    pub fn to_raw(&self) -> RawParameters {
        [
            ("m", self.m),
            ("c", self.c),
            ("k", self.k),
            ("y0", self.y0),
            ("v0", self.v0),
            ("duration", self.duration),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
    }

    pub fn mass(&self) -> Mass {
        ds_core::kg(self.m)
    }

    pub fn initial_displacement(&self) -> Length {
        ds_core::m(self.y0)
    }

    pub fn initial_velocity(&self) -> Velocity {
        ds_core::mps(self.v0)
    }

    pub fn horizon(&self) -> Time {
        ds_core::s(self.duration)
    }
}

fn field(raw: &RawParameters, name: &'static str) -> Result<f64, ValidationError> {
    raw.get(name)
        .copied()
        .ok_or(ValidationError(DsError::Missing { what: name }))
}

/// Validate raw input into a complete parameter record.
///
/// `dt` and `scale` come from `active`; any such keys in `raw` are ignored.
/// Pure: `active` is only read.
pub fn validate(raw: &RawParameters, active: &Parameters) -> Result<Parameters, ValidationError> {
    let m = ensure_positive(field(raw, "m")?, "m")?;
    let c = ensure_non_negative(field(raw, "c")?, "c")?;
    let k = ensure_positive(field(raw, "k")?, "k")?;
    let y0 = ensure_finite(field(raw, "y0")?, "y0")?;
    let v0 = ensure_finite(field(raw, "v0")?, "v0")?;
    let duration = ensure_positive(field(raw, "duration")?, "duration")?;

    Ok(Parameters {
        m,
        c,
        k,
        y0,
        v0,
        duration,
        dt: active.dt,
        scale: active.scale,
    })
}
