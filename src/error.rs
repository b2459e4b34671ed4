//! Centralized error handling for galefetch

use std::fmt;
use std::io;

/// Custom error type for galefetch operations
#[derive(Debug)]
pub enum GalefetchError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// Parsing errors (invalid data format)
    Parse(String),
    /// Configuration errors
    Config(String),
    /// System detection errors
    Detection(String),
}

impl fmt::Display for GalefetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalefetchError::Io(err) => write!(f, "I/O error: {}", err),
            GalefetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
            GalefetchError::Config(msg) => write!(f, "Config error: {}", msg),
            GalefetchError::Detection(msg) => write!(f, "Detection error: {}", msg),
        }
    }
}

impl std::error::Error for GalefetchError {}

impl From<io::Error> for GalefetchError {
    fn from(error: io::Error) -> Self {
        GalefetchError::Io(error)
    }
}

/// Type alias for Results in galefetch
pub type Result<T> = std::result::Result<T, GalefetchError>;
