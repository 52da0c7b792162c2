//! Error types
//!
//! Defines domain-specific error types for upload persistence.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// An upload handle exposed none of the recognized byte-retrieval
/// capabilities
#[derive(Debug)]
pub struct UnsupportedHandleError {
    pub name: String,
}

impl fmt::Display for UnsupportedHandleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported uploaded file object {}: no readable interface",
            self.name
        )
    }
}

impl std::error::Error for UnsupportedHandleError {}

/// Lower-level failures inside a persist batch
#[derive(Debug)]
pub enum SaveError {
    Io(io::Error),
    Unsupported(UnsupportedHandleError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Unsupported(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<io::Error> for SaveError {
    fn from(error: io::Error) -> Self {
        SaveError::Io(error)
    }
}

impl From<UnsupportedHandleError> for SaveError {
    fn from(error: UnsupportedHandleError) -> Self {
        SaveError::Unsupported(error)
    }
}

/// Failure of a whole persist batch, carrying the target directory for
/// context. The only error type surfaced to callers.
#[derive(Debug)]
pub struct PersistenceError {
    message: String,
    dir: PathBuf,
    source: SaveError,
}

impl PersistenceError {
    pub fn new(message: impl Into<String>, dir: &Path, source: SaveError) -> Self {
        Self {
            message: message.into(),
            dir: dir.to_path_buf(),
            source,
        }
    }

    /// The target directory the failed batch was writing into
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (dir: {}): {}",
            self.message,
            self.dir.display(),
            self.source
        )
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
