//! ds-project: oscillator project file format and validation.

pub mod params_js;
pub mod schema;
pub mod validate;

use std::path::Path;

pub use params_js::{render_params_js, write_params_js};
pub use schema::*;
pub use validate::{ValidationError, validate_project};

pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file extension: {path}")]
    UnknownFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<ProjectFile> {
    let content = std::fs::read_to_string(path)?;
    let project: ProjectFile = serde_yaml::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_yaml(path: &Path, project: &ProjectFile) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<ProjectFile> {
    let content = std::fs::read_to_string(path)?;
    let project: ProjectFile = serde_json::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_json(path: &Path, project: &ProjectFile) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_json::to_string_pretty(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> ProjectResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(ProjectError::UnknownFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Load a project, picking YAML or JSON by file extension.
pub fn load_project(path: &Path) -> ProjectResult<ProjectFile> {
    match format_of(path)? {
        Format::Yaml => load_yaml(path),
        Format::Json => load_json(path),
    }
}

/// Save a project, picking YAML or JSON by file extension.
pub fn save_project(path: &Path, project: &ProjectFile) -> ProjectResult<()> {
    match format_of(path)? {
        Format::Yaml => save_yaml(path, project),
        Format::Json => save_json(path, project),
    }
}
