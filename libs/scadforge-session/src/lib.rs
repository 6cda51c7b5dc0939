//! # Scadforge Session
//!
//! Interactive collection and persistence around the shape model.
//!
//! ## Architecture
//!
//! ```text
//! prompts → ShapeCollector (ShapeCollection)
//!         → emit_statements (lines)
//!         → write_document via FileSystem (.scad file)
//! ```
//!
//! The collector and the session driver are generic over their input and
//! output streams, and persistence goes through the [`FileSystem`] trait, so
//! whole sessions run against in-memory streams and files in tests.
//!
//! ## Example
//!
//! ```rust
//! use scadforge_session::{run_session, InMemoryFilesystem};
//!
//! let script = "2\n5\n0 0 0\n0\nn\nn\nball\n";
//! let mut fs = InMemoryFilesystem::default();
//! let mut prompts = Vec::new();
//! let path = run_session(script.as_bytes(), &mut prompts, &mut fs).unwrap();
//! assert_eq!(path, "./ball.scad");
//! ```

pub mod collector;
pub mod error;
pub mod filesystem;
pub mod session;
pub mod writer;

// Re-export public API
pub use collector::ShapeCollector;
pub use error::SessionError;
pub use filesystem::{FileSystem, FileSystemError, InMemoryFilesystem, OsFilesystem};
pub use session::run_session;
pub use writer::{write_document, WriteMode};
