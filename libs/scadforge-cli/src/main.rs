//! Command-line entry point for scadforge.
//!
//! Runs one interactive session over stdin/stdout against the real
//! filesystem. An unwritable target is fatal: the error is reported and the
//! process exits with a non-zero status. An unreadable existing file in
//! append mode only logs a warning (see the session writer).

use anyhow::Context;
use scadforge_session::{run_session, OsFilesystem};
use std::io;

fn main() -> anyhow::Result<()> {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut fs = OsFilesystem;
    run_session(stdin.lock(), stdout.lock(), &mut fs)
        .context("could not complete the modeling session")?;
    Ok(())
}

/// Initializes the global logger, honoring `RUST_LOG` when set.
///
/// Warnings stay visible by default so append-mode fallbacks reach the user.
fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}
