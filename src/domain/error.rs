use std::io;

use thiserror::Error;

/// Library-wide error type for wsgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or deployment metadata issue.
    #[error("{0}")]
    Configuration(String),

    /// A required deployment attachment is missing.
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// Web archive could not be written.
    #[error("{message}: {source}")]
    DeploymentFailed {
        message: String,
        #[source]
        source: io::Error,
    },

    /// Endpoint short name is invalid.
    #[error("Invalid endpoint name '{0}': must be non-empty and contain no whitespace or '/'")]
    InvalidEndpointName(String),

    /// Deployment manifest or record file could not be parsed.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn deployment_failed<S: Into<String>>(message: S, source: io::Error) -> Self {
        AppError::DeploymentFailed { message: message.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::DeploymentFailed { source: err, .. } => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidEndpointName(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::IllegalState(_) => io::ErrorKind::Other,
        }
    }
}
