use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for hilite
#[derive(Debug, Error)]
pub enum HiliteError {
    #[error(
        "Unknown comparison mode '{0}'. Expected one of: ordinal, ordinal-ignore-case, \
         culture-sensitive, culture-sensitive-ignore-case, invariant-culture, \
         invariant-culture-ignore-case"
    )]
    UnknownComparisonMode(String),

    #[error("Invalid culture tag '{0}'")]
    InvalidCulture(String),

    #[error("Unknown sample text '{0}'. Run with --list-samples to see what is available")]
    UnknownSample(String),

    #[error("Unknown color '{0}'")]
    InvalidColor(String),

    #[error("Malformed delimited text: {0}")]
    MalformedDelimited(String),

    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
