//! Cross-field and numeric-range validation of the assembled record.
//!
//! Rules run in a fixed order and evaluation stops at the first failure, so
//! the caller reports exactly one diagnostic. Enum fields and the metadata
//! toggle are never checked here; their absence defers to the downstream
//! default.

use crate::constants::{
    MAX_JPEG_QUALITY, MAX_MATCH_THRESHOLD, MAX_PANO_MPX, MAX_PNG_COMPRESSION, MAX_SHIFT_IN_PANO,
    MIN_MATCH_THRESHOLD, MIN_PANO_MPX, MIN_SHIFT_IN_PANO,
};
use crate::error::ValidationError;
use crate::paths;

use super::Invocation;

pub(super) fn validate(invocation: &Invocation) -> Result<(), ValidationError> {
    if let Some(output_path) = &invocation.output_path {
        if invocation.input_paths.is_empty() {
            return Err(ValidationError::OutputWithoutInputs);
        }
        if !paths::is_extension_supported(output_path) {
            return Err(ValidationError::UnsupportedOutputExtension {
                extension: output_path.extension().unwrap_or_default().to_owned(),
            });
        }
        if invocation.should_run_gui {
            return Err(ValidationError::OutputWithGui);
        }
    }

    if let Some(threshold) = invocation.match_threshold {
        // A zero threshold would disable matching outright; reject it before
        // the range rule so it gets its own diagnostic.
        if threshold == 0 {
            return Err(ValidationError::ZeroMatchThreshold);
        }
        if !(MIN_MATCH_THRESHOLD..=MAX_MATCH_THRESHOLD).contains(&threshold) {
            return Err(ValidationError::MatchThresholdOutOfRange {
                min: MIN_MATCH_THRESHOLD,
                max: MAX_MATCH_THRESHOLD,
            });
        }
    }

    if let Some(min_shift) = invocation.min_shift
        && !(MIN_SHIFT_IN_PANO..=MAX_SHIFT_IN_PANO).contains(&min_shift)
    {
        return Err(ValidationError::MinShiftOutOfRange {
            min: MIN_SHIFT_IN_PANO,
            max: MAX_SHIFT_IN_PANO,
        });
    }

    if let Some(quality) = invocation.jpeg_quality
        && !(0..=MAX_JPEG_QUALITY).contains(&quality)
    {
        return Err(ValidationError::JpegQualityOutOfRange {
            max: MAX_JPEG_QUALITY,
        });
    }

    if let Some(compression) = invocation.png_compression
        && !(0..=MAX_PNG_COMPRESSION).contains(&compression)
    {
        return Err(ValidationError::PngCompressionOutOfRange {
            max: MAX_PNG_COMPRESSION,
        });
    }

    if let Some(mpx) = invocation.max_pano_mpx
        && !(MIN_PANO_MPX..=MAX_PANO_MPX).contains(&mpx)
    {
        return Err(ValidationError::MaxPanoMpxOutOfRange {
            min: MIN_PANO_MPX,
            max: MAX_PANO_MPX,
        });
    }

    Ok(())
}
