//! Project validation logic.

use crate::schema::ProjectFile;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error(transparent)]
    Parameter(#[from] ds_sim::ValidationError),

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &ProjectFile) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    project.parameters()?;

    let anim = &project.animation;
    if !(anim.dt_min.is_finite() && anim.dt_min > 0.0) {
        return Err(ValidationError::InvalidValue {
            field: "animation.dt_min".to_string(),
            value: anim.dt_min.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    if !(anim.dt_max.is_finite() && anim.dt_max >= anim.dt_min) {
        return Err(ValidationError::InvalidValue {
            field: "animation.dt_max".to_string(),
            value: anim.dt_max.to_string(),
            reason: format!("must be finite and >= dt_min ({})", anim.dt_min),
        });
    }

    if project.limits.max_steps == 0 {
        return Err(ValidationError::InvalidValue {
            field: "limits.max_steps".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}
