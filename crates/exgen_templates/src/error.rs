//! Error types for templates.

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while selecting or rendering templates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("No template registered for {0}")]
    NotFound(String),

    #[error("You must give at least one module name (e.g. users or users,books,tasks)")]
    EmptyModuleList,

    #[error("Invalid module name '{name}': {message}")]
    InvalidModuleName { name: String, message: String },

    #[error("No module kinds given (expected route, controller, service, model or test)")]
    EmptyKindList,

    #[error("Unknown module kind: {0}")]
    UnknownKind(String),

    #[error("Unknown database flavor: {0} (expected mongo or pg)")]
    UnknownDbFlavor(String),

    #[error("Invalid auth mode '{0}': pass \"jwt\" or \"session\"")]
    InvalidAuthMode(String),

    #[error("Unknown output language: {0} (expected ts or js)")]
    UnknownLanguage(String),
}
