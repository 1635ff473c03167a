//! Errors raised while loading a finder configuration file.

use std::fmt;
use std::path::PathBuf;

/// Failure to read or parse a YAML configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    /// The file could not be read.
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },
    /// The document is not a valid finder configuration.
    Parse(String),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "Cannot read {}: {}", path.display(), message)
            }
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}

impl From<serde_yaml::Error> for ConfigLoadError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
