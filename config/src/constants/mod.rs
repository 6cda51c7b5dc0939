//! Centralized configuration values shared across the scadforge pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

/// Number of fractional digits used when rendering a real value into
/// OpenSCAD source text.
///
/// The emitted text feeds a syntax-sensitive parser, so the precision is
/// pinned here rather than left to platform default float formatting.
/// Six digits matches the fixed-notation output the generator has always
/// produced (`5.0` renders as `5.000000`).
///
/// # Examples
/// ```
/// use config::constants::REAL_DECIMALS;
/// let text = format!("{:.prec$}", 2.5_f64, prec = REAL_DECIMALS);
/// assert_eq!(text, "2.500000");
/// ```
pub const REAL_DECIMALS: usize = 6;

/// File extension appended to generated OpenSCAD documents.
///
/// # Examples
/// ```
/// use config::constants::SCAD_FILE_EXTENSION;
/// assert!(SCAD_FILE_EXTENSION.starts_with('.'));
/// ```
pub const SCAD_FILE_EXTENSION: &str = ".scad";

/// Directory used for generated documents when the user does not pick a
/// save location.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_OUTPUT_DIR;
/// let path = format!("{}{}", DEFAULT_OUTPUT_DIR, "model.scad");
/// assert_eq!(path, "./model.scad");
/// ```
pub const DEFAULT_OUTPUT_DIR: &str = "./";
