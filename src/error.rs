//! Centralized error handling for ferrofetch

use std::fmt;
use std::io;

/// Custom error type for ferrofetch operations
#[derive(Debug)]
pub enum FetchError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// Parsing errors (invalid data format)
    Parse(String),
    /// System detection errors
    Detection(String),
    /// An external helper command exceeded its time budget
    Timeout(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Io(err) => write!(f, "I/O error: {}", err),
            FetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
            FetchError::Detection(msg) => write!(f, "Detection error: {}", msg),
            FetchError::Timeout(cmd) => write!(f, "Command '{}' timed out", cmd),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<io::Error> for FetchError {
    fn from(error: io::Error) -> Self {
        FetchError::Io(error)
    }
}

/// Type alias for Results in ferrofetch
pub type Result<T> = std::result::Result<T, FetchError>;
