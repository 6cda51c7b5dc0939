//! # Session Errors
//!
//! Error types for interactive collection and persistence.

use crate::filesystem::FileSystemError;
use thiserror::Error;

/// Errors that can end a session early.
///
/// Invalid user entries (unknown menu selection, malformed number tuple) are
/// not errors: the collector reports them on the prompt stream and asks
/// again. Only stream and filesystem failures surface here.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing a prompt stream failed.
    #[error("prompt stream error: {0}")]
    Prompt(#[from] std::io::Error),

    /// Input ended in the middle of a shape entry or driver question.
    #[error("input ended before the session was complete")]
    UnexpectedEof,

    /// The generated document could not be persisted.
    #[error(transparent)]
    Filesystem(#[from] FileSystemError),
}

// =============================================================================
// TESTS
// =============================================================================
