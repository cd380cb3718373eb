//! Token dispatch: routing raw arguments into [`Invocation`] fields.
//!
//! Boolean flags match exactly; valued flags match on their `--name=` prefix
//! and route the remainder to the typed or enum parser for the field. A value
//! that fails to parse leaves the field unset and never aborts the scan, so a
//! bad value for one flag cannot swallow later tokens. Everything else is a
//! positional input path.

use camino::Utf8PathBuf;

use super::Invocation;
use super::value::{parse_decimal, parse_float};
use crate::options::{MatchingType, ProjectionType, WaveCorrectionType};
use crate::sink::DiagnosticSink;

const GUI_FLAG: &str = "--gui";
const HELP_FLAG: &str = "--help";
const VERSION_FLAG: &str = "--version";
const OUTPUT_FLAG: &str = "--output=";
const PROJECTION_FLAG: &str = "--projection=";
const MATCHING_TYPE_FLAG: &str = "--matching-type=";
const MATCH_THRESHOLD_FLAG: &str = "--match-threshold=";
const MIN_SHIFT_FLAG: &str = "--min-shift=";
const JPEG_QUALITY_FLAG: &str = "--jpeg-quality=";
const PNG_COMPRESSION_FLAG: &str = "--png-compression=";
const COPY_METADATA_FLAG: &str = "--copy-metadata";
const NO_COPY_METADATA_FLAG: &str = "--no-copy-metadata";
const WAVE_CORRECTION_FLAG: &str = "--wave-correction=";
const MAX_PANO_MPX_FLAG: &str = "--max-pano-mpx=";

pub(super) fn apply_token(invocation: &mut Invocation, token: &str, sink: &dyn DiagnosticSink) {
    if token == GUI_FLAG {
        invocation.should_run_gui = true;
    } else if token == HELP_FLAG {
        invocation.should_print_help = true;
    } else if token == VERSION_FLAG {
        invocation.should_print_version = true;
    } else if let Some(value) = token.strip_prefix(OUTPUT_FLAG) {
        invocation.output_path = Some(Utf8PathBuf::from(value));
    } else if let Some(value) = token.strip_prefix(PROJECTION_FLAG) {
        invocation.projection = ProjectionType::from_literal(value);
    } else if let Some(value) = token.strip_prefix(MATCHING_TYPE_FLAG) {
        invocation.matching_type = MatchingType::from_literal(value);
        if invocation.matching_type.is_none() {
            sink.warn(&format!(
                "Invalid --matching-type '{value}', using default (auto). Valid: {}",
                MatchingType::literal_list()
            ));
        }
    } else if let Some(value) = token.strip_prefix(MATCH_THRESHOLD_FLAG) {
        invocation.match_threshold = parse_decimal(value);
    } else if let Some(value) = token.strip_prefix(MIN_SHIFT_FLAG) {
        invocation.min_shift = parse_float(value);
    } else if let Some(value) = token.strip_prefix(JPEG_QUALITY_FLAG) {
        invocation.jpeg_quality = parse_decimal(value);
    } else if let Some(value) = token.strip_prefix(PNG_COMPRESSION_FLAG) {
        invocation.png_compression = parse_decimal(value);
    } else if token == COPY_METADATA_FLAG {
        invocation.should_copy_metadata = Some(true);
    } else if token == NO_COPY_METADATA_FLAG {
        invocation.should_copy_metadata = Some(false);
    } else if let Some(value) = token.strip_prefix(WAVE_CORRECTION_FLAG) {
        invocation.wave_correction = WaveCorrectionType::from_literal(value);
    } else if let Some(value) = token.strip_prefix(MAX_PANO_MPX_FLAG) {
        invocation.max_pano_mpx = parse_decimal(value);
    } else {
        invocation.input_paths.push(Utf8PathBuf::from(token));
    }
}
