//! # Config Crate
//!
//! Centralized configuration constants for the scadforge pipeline.
//! Output-format knobs are defined here to ensure the rendered OpenSCAD
//! text stays consistent across crates and easy to adjust in one place.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{REAL_DECIMALS, SCAD_FILE_EXTENSION};
//!
//! // Use REAL_DECIMALS when rendering coordinates and dimensions
//! let rendered = format!("{:.prec$}", 5.0_f64, prec = REAL_DECIMALS);
//! assert_eq!(rendered, "5.000000");
//!
//! // Use SCAD_FILE_EXTENSION when building output paths
//! let path = format!("{}{}", "model", SCAD_FILE_EXTENSION);
//! assert_eq!(path, "model.scad");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Syntax-Sensitive**: Formatting values are pinned, never platform defaults
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
