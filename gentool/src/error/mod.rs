//! Error types and error handling

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Generation error type
#[derive(Debug, Error)]
pub enum GenError {
    /// A source or destination path that must exist is missing
    #[error("{what} doesn't exist: {}", .path.display())]
    PathNotFound {
        /// Which path was being resolved (e.g. "Example directory")
        what: &'static str,
        /// The missing path
        path: PathBuf,
    },

    /// An argument was empty or otherwise unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Copy, read, write or rename failure
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path the failed operation was acting on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to the console failed
    #[error("Console I/O error: {0}")]
    Console(#[source] io::Error),

    /// Menu selection or name input could not be used
    #[error("Wrong input: {0}")]
    InputParse(String),

    /// The prompt gave up after repeated bad input
    #[error("Giving up after {0} invalid inputs")]
    TooManyAttempts(u32),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GenError {
    /// Wrap an I/O error together with the path it concerns
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a [`GenError::PathNotFound`]
    pub fn not_found(what: &'static str, path: impl AsRef<Path>) -> Self {
        Self::PathNotFound {
            what,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Whether the prompt loop may recover from this error by asking again
    #[must_use]
    pub const fn is_recoverable_input(&self) -> bool {
        matches!(self, Self::InputParse(_))
    }
}

impl From<figment::Error> for GenError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T, E = GenError> = std::result::Result<T, E>;
