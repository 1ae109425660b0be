//! Error types for game persistence.

use std::fmt;
use std::io;

/// Errors that can occur while saving or loading a game.
///
/// A missing save file is not an error; `persist::load` reports it as
/// `Ok(None)`.
#[derive(Debug)]
pub enum PersistError {
    /// Reading or writing the save file failed.
    Io(io::Error),
    /// The save file exists but does not contain a valid saved game.
    Malformed(serde_json::Error),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io(e) => write!(f, "save file I/O failed: {e}"),
            PersistError::Malformed(e) => write!(f, "save file is not a valid game: {e}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Io(e) => Some(e),
            PersistError::Malformed(e) => Some(e),
        }
    }
}

impl From<io::Error> for PersistError {
    fn from(e: io::Error) -> Self {
        PersistError::Io(e)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        PersistError::Malformed(e)
    }
}

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;
