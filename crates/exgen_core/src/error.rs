//! Error types for scaffold generation.

use std::path::PathBuf;

use exgen_templates::TemplateError;
use thiserror::Error;

/// Result type alias for scaffold operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that stop a scaffold run.
///
/// File collisions are not errors; they are reported as skipped files.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Source folder does not exist: {0}. Run `exgen init` first")]
    SourceRootMissing(PathBuf),

    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
