//! Error types and exit codes for shortpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph, unknown source node)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or source (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading graphs or computing shortest paths
#[derive(Error, Debug)]
pub enum ShortpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },
}

impl ShortpathError {
    /// Create an error for a graph or source that violates the engine's preconditions
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        ShortpathError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        ShortpathError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        ShortpathError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ShortpathError::UnknownFormat(_)
            | ShortpathError::UsageError(_)
            | ShortpathError::Unsupported { .. } => ExitCode::Usage,

            ShortpathError::InvalidInput { .. } => ExitCode::Data,

            ShortpathError::Io(_)
            | ShortpathError::Yaml(_)
            | ShortpathError::Json(_)
            | ShortpathError::Toml(_)
            | ShortpathError::FailedOperation { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortpathError::UnknownFormat(_) => "unknown_format",
            ShortpathError::UsageError(_) => "usage_error",
            ShortpathError::Unsupported { .. } => "unsupported",
            ShortpathError::InvalidInput { .. } => "invalid_input",
            ShortpathError::Io(_) => "io_error",
            ShortpathError::Yaml(_) => "yaml_error",
            ShortpathError::Json(_) => "json_error",
            ShortpathError::Toml(_) => "toml_error",
            ShortpathError::FailedOperation { .. } => "failed_operation",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for shortpath operations
pub type Result<T> = std::result::Result<T, ShortpathError>;
