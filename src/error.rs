//! Error types for invocation parsing.
//!
//! Every failure is terminal for the parse call: the caller re-invokes with
//! corrected input. The parse pipeline logs exactly one diagnostic line per
//! failure through the injected sink; no exit-code mapping happens here.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = InvocationError> = std::result::Result<T, E>;

/// Terminal failures produced while assembling an invocation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvocationError {
    /// A positional directory argument could not be enumerated. This is the
    /// only way raw parsing can abort; bad flag values never get this far.
    #[error("Failed to enumerate directory '{path}': {source}")]
    DirectoryEnumeration {
        /// Directory whose enumeration failed.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Positional inputs resolved to zero supported files despite at least
    /// one input surviving directory expansion.
    #[error("No supported images provided!")]
    NoSupportedImages,

    /// The assembled record violated a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// First violated rule of the validator's fixed-order rule table.
///
/// Bound values are carried as fields so the rendered message always matches
/// the constants the validator checked against.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// An output path was given without any surviving input image.
    #[error("No supported images provided")]
    OutputWithoutInputs,

    /// The output path carries an extension outside the supported set.
    #[error("Unsupported output file extension: \"{extension}\"")]
    UnsupportedOutputExtension {
        /// Extension of the rejected output path, without the leading dot.
        extension: String,
    },

    /// `--gui` and `--output` were requested together.
    #[error("Specifying --gui and --output together is not yet supported.")]
    OutputWithGui,

    /// `--match-threshold` was zero, which disables matching entirely and is
    /// rejected before the range rule runs.
    #[error("Invalid value for --match-threshold")]
    ZeroMatchThreshold,

    /// `--match-threshold` fell outside the configured range.
    #[error("--match-threshold must be between {min} and {max}")]
    MatchThresholdOutOfRange {
        /// Smallest accepted value.
        min: i32,
        /// Largest accepted value.
        max: i32,
    },

    /// `--min-shift` fell outside the configured range.
    #[error("--min-shift must be between {min} and {max}")]
    MinShiftOutOfRange {
        /// Smallest accepted value.
        min: f32,
        /// Largest accepted value.
        max: f32,
    },

    /// `--jpeg-quality` fell outside the configured range.
    #[error("--jpeg-quality must be between 0 and {max}")]
    JpegQualityOutOfRange {
        /// Largest accepted value.
        max: i32,
    },

    /// `--png-compression` fell outside the configured range.
    #[error("--png-compression must be between 0 and {max}")]
    PngCompressionOutOfRange {
        /// Largest accepted value.
        max: i32,
    },

    /// `--max-pano-mpx` fell outside the configured range.
    #[error("--max-pano-mpx must be between {min} and {max}")]
    MaxPanoMpxOutOfRange {
        /// Smallest accepted value.
        min: i32,
        /// Largest accepted value.
        max: i32,
    },
}
