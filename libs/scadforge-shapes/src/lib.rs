//! # Scadforge Shapes
//!
//! Typed shape model and OpenSCAD statement rendering.
//!
//! ## Architecture
//!
//! ```text
//! Shape (primitive + position) → render_statement → "translate([..]) box([..]);"
//! ShapeCollection → emit_statements → ordered Vec<String>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use scadforge_shapes::{emit_statements, Shape, ShapeCollection};
//!
//! let mut shapes = ShapeCollection::new();
//! let mut cube = Shape::cube(10.0, 20.0, 30.0);
//! cube.set_position(1.0, 2.0, 3.0);
//! shapes.push(cube);
//!
//! let lines = emit_statements(&shapes);
//! assert_eq!(
//!     lines[0],
//!     "translate([1.000000, 2.000000, 3.000000]) box([10.000000, 20.000000, 30.000000]);"
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **Closed Model**: The primitive set is a sum type, not an open hierarchy
//! - **Pinned Formatting**: Reals render with a fixed fractional precision
//! - **Pure Rendering**: Statement generation never fails and never does I/O

pub mod collection;
pub mod emitter;
pub mod format;
pub mod shape;

// Re-export public API
pub use collection::ShapeCollection;
pub use emitter::emit_statements;
pub use format::{format_real, format_vec3};
pub use shape::{Primitive, Shape};
