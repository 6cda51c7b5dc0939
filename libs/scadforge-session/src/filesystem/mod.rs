//! Filesystem abstractions used by the session layer.
//!
//! Persistence goes through a small trait so that sessions run against real
//! disks in the binary and against an in-memory implementation in tests,
//! satisfying the "no mocks" constraint.

use std::collections::HashMap;
use thiserror::Error;

/// Minimal filesystem trait supporting document persistence.
///
/// # Examples
/// ```
/// use scadforge_session::{FileSystem, InMemoryFilesystem};
/// let fs = InMemoryFilesystem::default();
/// assert!(fs.read_to_string("model.scad").is_err());
/// ```
pub trait FileSystem {
    /// Reads an entire file into memory.
    fn read_to_string(&self, path: &str) -> Result<String, FileSystemError>;

    /// Writes the contents to the path, replacing any existing file.
    fn write(&mut self, path: &str, contents: &str) -> Result<(), FileSystemError>;
}

/// Error raised when filesystem operations fail.
///
/// # Examples
/// ```
/// use scadforge_session::{FileSystem, FileSystemError, InMemoryFilesystem};
/// let fs = InMemoryFilesystem::default();
/// let err = fs.read_to_string("foo.scad").unwrap_err();
/// assert!(matches!(err, FileSystemError::NotFound { .. }));
/// ```
#[derive(Debug, Error, PartialEq)]
pub enum FileSystemError {
    /// The requested path could not be found.
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// The path exists but could not be read.
    #[error("failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    /// The path could not be written.
    #[error("failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

/// In-memory filesystem intended for tests and headless sessions.
///
/// # Examples
/// ```
/// use scadforge_session::{FileSystem, InMemoryFilesystem};
/// let mut fs = InMemoryFilesystem::default();
/// fs.insert("scene.scad", "cube(1);");
/// assert_eq!(fs.read_to_string("scene.scad").unwrap(), "cube(1);");
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryFilesystem {
    files: HashMap<String, String>,
}

impl InMemoryFilesystem {
    /// Inserts or replaces a file entry.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl FileSystem for InMemoryFilesystem {
    fn read_to_string(&self, path: &str) -> Result<String, FileSystemError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FileSystemError::NotFound { path: path.into() })
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<(), FileSystemError> {
        self.files.insert(path.into(), contents.into());
        Ok(())
    }
}

/// Filesystem backed by `std::fs`, used by the command-line binary.
#[derive(Debug, Default, Clone)]
pub struct OsFilesystem;

impl FileSystem for OsFilesystem {
    fn read_to_string(&self, path: &str) -> Result<String, FileSystemError> {
        std::fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => FileSystemError::NotFound { path: path.into() },
            _ => FileSystemError::ReadFailed {
                path: path.into(),
                message: err.to_string(),
            },
        })
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<(), FileSystemError> {
        std::fs::write(path, contents).map_err(|err| FileSystemError::WriteFailed {
            path: path.into(),
            message: err.to_string(),
        })
    }
}
