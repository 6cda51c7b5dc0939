//! # Session Driver
//!
//! Orchestrates one full session: collect shapes, pick the write mode and
//! target path, emit statements, and persist the document.
//!
//! The driver is generic over its streams and filesystem like the collector,
//! so an entire session can be scripted in tests. The command-line binary
//! wires it to stdin, stdout, and the real disk.

use crate::collector::ShapeCollector;
use crate::error::SessionError;
use crate::filesystem::FileSystem;
use crate::writer::{write_document, WriteMode};
use config::constants::{DEFAULT_OUTPUT_DIR, SCAD_FILE_EXTENSION};
use log::info;
use scadforge_shapes::emit_statements;
use std::io::{BufRead, Write};

/// Run one interactive session and return the path the document was saved
/// to.
///
/// Dialogue order follows the collector's menu loop, then:
/// append? → save location? → file name → write → confirmation. The target
/// path is the chosen directory immediately followed by the file name and
/// the `.scad` extension.
///
/// ## Example
///
/// ```rust
/// use scadforge_session::{run_session, FileSystem, InMemoryFilesystem};
///
/// let script = "2\n5\n0 0 0\n0\nn\nn\nball\n";
/// let mut fs = InMemoryFilesystem::default();
/// let mut prompts = Vec::new();
/// let path = run_session(script.as_bytes(), &mut prompts, &mut fs).unwrap();
/// assert_eq!(
///     fs.read_to_string(&path).unwrap(),
///     "translate([0.000000, 0.000000, 0.000000]) sphere(r=5.000000);\n"
/// );
/// ```
pub fn run_session<R: BufRead, W: Write, F: FileSystem>(
    mut input: R,
    mut output: W,
    fs: &mut F,
) -> Result<String, SessionError> {
    let shapes = ShapeCollector::new(&mut input, &mut output).collect()?;

    let append = confirm(
        &mut input,
        &mut output,
        "Append to an existing file? (y/n): ",
    )?;
    let mode = if append {
        WriteMode::Append
    } else {
        WriteMode::Overwrite
    };

    let directory = if confirm(&mut input, &mut output, "Choose a save location? (y/n): ")? {
        read_token(
            &mut input,
            &mut output,
            "Enter the directory to save into (e.g. ./, /home/user/): ",
        )?
    } else {
        writeln!(output, "No save location given; using the default location.")?;
        DEFAULT_OUTPUT_DIR.to_string()
    };

    let file_name = read_token(
        &mut input,
        &mut output,
        "Enter the file name to save (without extension): ",
    )?;
    let path = format!("{directory}{file_name}{SCAD_FILE_EXTENSION}");

    let lines = emit_statements(&shapes);
    write_document(fs, &path, &lines, mode)?;
    info!("wrote {} statements to {path}", lines.len());

    writeln!(output, "File saved: {path}")?;
    Ok(path)
}

/// Ask a yes/no question; any answer starting with `y` or `Y` counts as yes.
fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<bool, SessionError> {
    let answer = read_token(input, output, prompt)?;
    Ok(answer.starts_with('y') || answer.starts_with('Y'))
}

/// Prompt for one non-empty token, re-prompting on blank lines. End of input
/// here is an error: the session cannot finish without an answer.
fn read_token<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, SessionError> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SessionError::UnexpectedEof);
        }
        let token = line.trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
