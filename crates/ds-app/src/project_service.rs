//! Project loading and parameter overrides.

use std::path::Path;

use ds_project::ProjectFile;
use ds_sim::{EDITABLE_FIELDS, Parameters, validate};

use crate::session::{Session, SessionConfig};
use crate::{AppError, AppResult};

pub fn load_project(path: &Path) -> AppResult<ProjectFile> {
    Ok(ds_project::load_project(path)?)
}

/// Project parameters with `overrides` applied through the parameter model.
///
/// Only editable fields may be overridden; `dt` and `scale` always come from
/// the project file.
pub fn resolve_parameters(
    project: &ProjectFile,
    overrides: &[(String, f64)],
) -> AppResult<Parameters> {
    let base = project.parameters()?;
    if overrides.is_empty() {
        return Ok(base);
    }

    let mut raw = base.to_raw();
    for (name, value) in overrides {
        if !EDITABLE_FIELDS.contains(&name.as_str()) {
            return Err(AppError::InvalidInput(format!(
                "'{}' is not an editable parameter (expected one of {})",
                name,
                EDITABLE_FIELDS.join(", ")
            )));
        }
        raw.insert(name.clone(), *value);
    }
    Ok(validate(&raw, &base)?)
}

pub fn session_from_project(
    project: &ProjectFile,
    overrides: &[(String, f64)],
) -> AppResult<Session> {
    let params = resolve_parameters(project, overrides)?;
    let config = SessionConfig {
        stepper: project.stepper()?,
        integrate: project.integrate_options(),
    };
    Session::new(params, config)
}
