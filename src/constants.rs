//! Shared numeric bounds and defaults.
//!
//! The validator rejects values outside these bounds and the help renderer
//! prints them, so the two can never drift apart.

/// Smallest accepted `--match-threshold` value.
pub const MIN_MATCH_THRESHOLD: i32 = 4;

/// Largest accepted `--match-threshold` value.
pub const MAX_MATCH_THRESHOLD: i32 = 250;

/// Match threshold applied when the flag is absent.
pub const DEFAULT_MATCH_THRESHOLD: i32 = 70;

/// Smallest accepted `--min-shift` value, in pixels.
pub const MIN_SHIFT_IN_PANO: f32 = 0.0;

/// Largest accepted `--min-shift` value, in pixels.
pub const MAX_SHIFT_IN_PANO: f32 = 200.0;

/// Minimum shift filter applied when the flag is absent.
pub const DEFAULT_SHIFT_IN_PANO: f32 = 40.0;

/// Largest accepted `--jpeg-quality` value; the lower bound is zero.
pub const MAX_JPEG_QUALITY: i32 = 100;

/// JPEG quality applied when the flag is absent.
pub const DEFAULT_JPEG_QUALITY: i32 = 95;

/// Largest accepted `--png-compression` value; the lower bound is zero.
pub const MAX_PNG_COMPRESSION: i32 = 9;

/// PNG compression level applied when the flag is absent.
pub const DEFAULT_PNG_COMPRESSION: i32 = 6;

/// Smallest accepted `--max-pano-mpx` value.
pub const MIN_PANO_MPX: i32 = 1;

/// Largest accepted `--max-pano-mpx` value.
pub const MAX_PANO_MPX: i32 = 5000;

/// Panorama size cap, in megapixels, applied when the flag is absent.
pub const DEFAULT_MAX_PANO_MPX: i32 = 100;
