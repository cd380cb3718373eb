//! Static help and version rendering.
//!
//! The usage block names every flag, the accepted enum literals, the numeric
//! ranges and defaults shared with the validator, and the supported-extension
//! list. Output goes to the sink's informational channel, one line per call.

use crate::constants::{
    DEFAULT_JPEG_QUALITY, DEFAULT_MATCH_THRESHOLD, DEFAULT_MAX_PANO_MPX, DEFAULT_PNG_COMPRESSION,
    DEFAULT_SHIFT_IN_PANO, MAX_JPEG_QUALITY, MAX_MATCH_THRESHOLD, MAX_PNG_COMPRESSION,
    MAX_SHIFT_IN_PANO, MIN_MATCH_THRESHOLD, MIN_SHIFT_IN_PANO,
};
use crate::options::{MatchingType, ProjectionType, WaveCorrectionType};
use crate::paths::SUPPORTED_EXTENSIONS;
use crate::sink::DiagnosticSink;

const TOOL_NAME: &str = "Panstitch";

/// Emits the tool name and crate version on the informational channel.
pub fn render_version(sink: &dyn DiagnosticSink) {
    sink.info(&format!("{TOOL_NAME} v{}", env!("CARGO_PKG_VERSION")));
}

/// Emits the full usage block on the informational channel.
pub fn render_help(sink: &dyn DiagnosticSink) {
    render_version(sink);
    sink.info("");
    sink.info(&format!(
        "Usage: {TOOL_NAME} [<input files or directories>] [options]"
    ));
    sink.info("");
    sink.info("Options:");
    sink.info("  --output=<path>          Output file path");
    sink.info("  --gui                    Launch GUI mode");
    sink.info("  --help                   Show this help message");
    sink.info("  --version                Show version");
    sink.info("");
    sink.info("Projection:");
    sink.info("  --projection=<type>      Projection type (default: spherical)");
    sink.info(&format!(
        "                           Types: {}",
        ProjectionType::literal_list()
    ));
    sink.info("");
    sink.info("Matching:");
    sink.info("  --matching-type=<type>   Matching mode (default: auto)");
    sink.info(&format!(
        "                           Types: {}",
        MatchingType::literal_list()
    ));
    sink.info("                           auto: pairwise matching, recommended");
    sink.info("                           single: assume all images form one pano");
    sink.info("                           none: skip matching");
    sink.info(&format!(
        "  --match-threshold=<N>    Match threshold, {MIN_MATCH_THRESHOLD} - {MAX_MATCH_THRESHOLD} (default: {DEFAULT_MATCH_THRESHOLD})"
    ));
    sink.info(&format!(
        "  --min-shift=<F>          Min shift filter, {MIN_SHIFT_IN_PANO} - {MAX_SHIFT_IN_PANO} (default: {DEFAULT_SHIFT_IN_PANO})"
    ));
    sink.info("");
    sink.info("Export:");
    sink.info(&format!(
        "  --jpeg-quality=<N>       JPEG quality, 0 - {MAX_JPEG_QUALITY} (default: {DEFAULT_JPEG_QUALITY})"
    ));
    sink.info(&format!(
        "  --png-compression=<N>    PNG compression, 0 - {MAX_PNG_COMPRESSION} (default: {DEFAULT_PNG_COMPRESSION})"
    ));
    sink.info("  --copy-metadata          Copy EXIF metadata from the first image");
    sink.info("  --no-copy-metadata       Don't copy EXIF metadata");
    sink.info("");
    sink.info("Stitching:");
    sink.info("  --wave-correction=<type> Wave correction (default: auto)");
    sink.info(&format!(
        "                           Types: {}",
        WaveCorrectionType::literal_list()
    ));
    sink.info(&format!(
        "  --max-pano-mpx=<N>       Max panorama size in megapixels (default: {DEFAULT_MAX_PANO_MPX})"
    ));
    sink.info("");
    sink.info(&format!(
        "Supported formats: {}",
        SUPPORTED_EXTENSIONS.join(", ")
    ));
}
