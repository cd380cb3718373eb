//! Command-line invocation layer for the Panstitch panorama stitcher.
//!
//! This crate turns the raw argument vector into a single immutable
//! [`Invocation`] record, or a terminal [`InvocationError`]. Parsing runs a
//! fixed pipeline: token dispatch, directory expansion, supported-extension
//! filtering, a lexicographic sort of the input paths, and a cross-field
//! validation pass. The record is then handed to the GUI or the headless
//! stitching pipeline, neither of which lives here.
//!
//! Diagnostics are emitted through an injected [`DiagnosticSink`] so callers
//! control where parse-time output ends up. [`TracingSink`] forwards to the
//! ambient `tracing` subscriber; [`MemorySink`] records messages in order for
//! deterministic capture.
//!
//! ```
//! use panstitch_cli::{MemorySink, parse_invocation};
//!
//! # fn main() -> panstitch_cli::Result<()> {
//! let sink = MemorySink::new();
//! let invocation = parse_invocation(["--projection=panini", "--jpeg-quality=90"], &sink)?;
//! assert_eq!(invocation.jpeg_quality, Some(90));
//! assert!(invocation.input_paths.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
mod invocation;
pub mod options;
pub mod paths;
mod sink;

pub use error::{InvocationError, Result, ValidationError};
pub use invocation::{Invocation, parse_from_env, parse_invocation, render_help, render_version};
pub use sink::{Diagnostic, DiagnosticSink, Level, MemorySink, TracingSink};
