//! # Document Writer
//!
//! Persists emitted statement lines through a [`FileSystem`], either
//! replacing the target or appending after its prior content.
//!
//! Append mode degrades gracefully: a target that does not exist or cannot
//! be read contributes empty prior content and a warning. A failed write is
//! returned to the caller, which treats it as fatal.

use crate::filesystem::{FileSystem, FileSystemError};
use log::warn;

/// How prior content of the target is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Discard any prior content.
    Overwrite,
    /// Keep prior content and add the new statements after it.
    Append,
}

/// Write the statement lines to `path`, each terminated by a newline.
///
/// In [`WriteMode::Append`] the prior content of `path` is written first,
/// byte-for-byte. Zero lines therefore reproduce the prior content exactly
/// in append mode and produce an empty file in overwrite mode.
///
/// ## Example
///
/// ```rust
/// use scadforge_session::{write_document, FileSystem, InMemoryFilesystem, WriteMode};
///
/// let mut fs = InMemoryFilesystem::default();
/// let lines = vec!["box([1.000000, 1.000000, 1.000000]);".to_string()];
/// write_document(&mut fs, "out.scad", &lines, WriteMode::Overwrite).unwrap();
/// assert!(fs.read_to_string("out.scad").unwrap().ends_with(");\n"));
/// ```
pub fn write_document(
    fs: &mut dyn FileSystem,
    path: &str,
    lines: &[String],
    mode: WriteMode,
) -> Result<(), FileSystemError> {
    let mut document = match mode {
        WriteMode::Overwrite => String::new(),
        WriteMode::Append => match fs.read_to_string(path) {
            Ok(prior) => prior,
            Err(err) => {
                warn!("could not read existing file, starting fresh: {err}");
                String::new()
            }
        },
    };

    for line in lines {
        document.push_str(line);
        document.push('\n');
    }

    fs.write(path, &document)
}

// =============================================================================
// TESTS
// =============================================================================
