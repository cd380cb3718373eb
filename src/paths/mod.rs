//! Path utilities: the supported-image allow-list, extension filtering and
//! directory expansion.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::InvocationError;
use crate::sink::DiagnosticSink;


/// Image formats the stitching pipeline can decode, compared ASCII
/// case-insensitively against file extensions.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "tif", "tiff", "bmp"];

/// Returns true when `path` carries a supported image extension.
#[must_use]
pub fn is_extension_supported(path: &Utf8Path) -> bool {
    path.extension().is_some_and(|extension| {
        let lowered = extension.to_ascii_lowercase();
        SUPPORTED_EXTENSIONS.contains(&lowered.as_str())
    })
}

/// Returns the subsequence of `paths` with supported extensions, preserving
/// order and duplicates.
#[must_use]
pub fn keep_supported(paths: &[Utf8PathBuf]) -> Vec<Utf8PathBuf> {
    paths
        .iter()
        .filter(|path| is_extension_supported(path))
        .cloned()
        .collect()
}

/// Replaces each directory in `paths` with its immediate regular-file
/// children, in the platform's enumeration order; other entries pass through
/// unchanged. Nested subdirectories are not descended into.
///
/// Emits one informational line per expanded directory.
///
/// # Errors
///
/// Returns [`InvocationError::DirectoryEnumeration`] when a directory cannot
/// be read, including entries whose names are not valid UTF-8.
pub fn expand_directories(
    paths: &[Utf8PathBuf],
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Utf8PathBuf>, InvocationError> {
    let mut expanded = Vec::with_capacity(paths.len());
    for path in paths {
        if path.is_dir() {
            sink.info(&format!("Expanding directory: {path}"));
            append_directory_files(path, &mut expanded)?;
        } else {
            expanded.push(path.clone());
        }
    }
    Ok(expanded)
}

fn append_directory_files(
    path: &Utf8Path,
    expanded: &mut Vec<Utf8PathBuf>,
) -> Result<(), InvocationError> {
    let enumeration_error = |source| InvocationError::DirectoryEnumeration {
        path: path.to_path_buf(),
        source,
    };
    for entry in path.read_dir_utf8().map_err(enumeration_error)? {
        let entry = entry.map_err(enumeration_error)?;
        if entry.file_type().map_err(enumeration_error)?.is_file() {
            expanded.push(entry.into_path());
        }
    }
    Ok(())
}
