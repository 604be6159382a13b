//! Error handling for amlctor.
//! Defines the error taxonomy and result type used throughout the application.

use std::fmt;
use std::io;
use thiserror::Error;

/// Why a step name was rejected by the name validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepNameReason {
    /// Not a bare identifier (letters, digits, underscore, no leading digit).
    NotIdentifier,
    /// Shorter than the configured minimum.
    TooShort,
    /// Longer than the configured maximum.
    TooLong,
    /// Listed in the reserved keyword deny-list.
    ReservedKeyword,
}

impl fmt::Display for StepNameReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            StepNameReason::NotIdentifier => "must be a valid identifier",
            StepNameReason::TooShort => "is shorter than the minimum length",
            StepNameReason::TooLong => "is longer than the maximum length",
            StepNameReason::ReservedKeyword => "is a reserved keyword",
        };
        f.write_str(message)
    }
}

/// Custom error types for amlctor operations.
///
/// Filesystem failures are carried as the native `io::Error` so callers can
/// still inspect its `ErrorKind`.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents malformed or incomplete pipeline settings
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Path '{path}' does not contain a pipeline.")]
    PathHasNoPipeline { path: String },

    #[error("Incorrect argument type: expected {expected}, got {actual}.")]
    IncorrectTypeArgument {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Incorrect step name '{step_name}': {reason}.")]
    IncorrectStepName {
        step_name: String,
        reason: StepNameReason,
    },

    #[error("Unsupported file: {filename}. Supports: {}.", .supported.join(", "))]
    UnsupportedFileType {
        filename: String,
        supported: Vec<&'static str>,
    },

    /// A data input that is neither a file nor a path input. This points at a
    /// settings loading bug rather than a user mistake.
    #[error("Internal error: unsupported data input variant '{variant}'.")]
    UnsupportedDataInputVariant { variant: String },
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
