//! The parsed command-line invocation and the parse pipeline.
//!
//! Pipeline order: token dispatch, directory expansion, supported-extension
//! filtering, lexicographic sort, validation. A failure at any stage is
//! terminal and logs exactly one diagnostic line; a success yields a complete
//! record, never a partially populated one.

mod dispatch;
mod help;
mod validate;
mod value;

#[cfg(test)]
mod tests;

pub use help::{render_help, render_version};

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::error::{InvocationError, Result};
use crate::options::{MatchingType, ProjectionType, WaveCorrectionType};
use crate::paths;
use crate::sink::DiagnosticSink;

/// Fully parsed and validated command-line invocation.
///
/// Built once per process invocation and handed to the caller by value;
/// nothing mutates it afterwards. Absent optional fields mean "defer to the
/// downstream default", never a sentinel value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    /// Launch the GUI instead of the headless pipeline.
    pub should_run_gui: bool,
    /// Render the usage text and exit.
    pub should_print_help: bool,
    /// Render the version line and exit.
    pub should_print_version: bool,
    /// Input images, post-processed to supported extensions only and sorted
    /// ascending by path string; duplicates are kept.
    pub input_paths: Vec<Utf8PathBuf>,
    /// Stitched output destination.
    pub output_path: Option<Utf8PathBuf>,
    /// Panorama projection.
    pub projection: Option<ProjectionType>,
    /// Image grouping mode.
    pub matching_type: Option<MatchingType>,
    /// Feature-match threshold.
    pub match_threshold: Option<i32>,
    /// Minimum shift filter, in pixels.
    pub min_shift: Option<f32>,
    /// JPEG export quality.
    pub jpeg_quality: Option<i32>,
    /// PNG export compression level.
    pub png_compression: Option<i32>,
    /// Copy EXIF metadata from the first input into the output.
    pub should_copy_metadata: Option<bool>,
    /// Wave correction mode.
    pub wave_correction: Option<WaveCorrectionType>,
    /// Panorama size cap in megapixels.
    pub max_pano_mpx: Option<i32>,
}

/// Parses the raw argument sequence (program name already excluded) into a
/// validated [`Invocation`].
///
/// # Errors
///
/// Returns an [`InvocationError`] when directory enumeration fails, when the
/// given inputs resolve to zero supported images, or when the assembled
/// record violates a validation rule. Each failure logs one diagnostic line
/// through `sink`.
pub fn parse_invocation<I, T>(args: I, sink: &dyn DiagnosticSink) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut invocation = Invocation::default();
    for token in args {
        dispatch::apply_token(&mut invocation, token.as_ref(), sink);
    }
    finalise(invocation, sink)
}

/// Parses the process's own argument vector, skipping the program name.
/// Arguments that are not valid UTF-8 are converted lossily.
///
/// # Errors
///
/// See [`parse_invocation`].
pub fn parse_from_env(sink: &dyn DiagnosticSink) -> Result<Invocation> {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    parse_invocation(args, sink)
}

fn finalise(mut invocation: Invocation, sink: &dyn DiagnosticSink) -> Result<Invocation> {
    let expanded = match paths::expand_directories(&invocation.input_paths, sink) {
        Ok(expanded) => expanded,
        Err(error) => {
            sink.error(&error.to_string());
            return Err(error);
        }
    };

    // Emptiness is judged on the expanded sequence: a lone empty directory
    // argument is not an error, a directory of unsupported files is.
    let supported = paths::keep_supported(&expanded);
    if supported.is_empty() && !expanded.is_empty() {
        let error = InvocationError::NoSupportedImages;
        sink.error(&error.to_string());
        return Err(error);
    }
    invocation.input_paths = supported;
    invocation.input_paths.sort();

    if let Err(error) = validate::validate(&invocation) {
        sink.error(&error.to_string());
        return Err(error.into());
    }
    Ok(invocation)
}
