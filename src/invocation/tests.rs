//! Unit tests for token dispatch, the typed value parsers, the validator and
//! the help renderer. Filesystem-backed pipeline behaviour is covered by the
//! integration tests.

use camino::Utf8PathBuf;
use rstest::rstest;

use super::{Invocation, dispatch, render_help, render_version, validate, value};
use crate::error::ValidationError;
use crate::options::{MatchingType, ProjectionType, WaveCorrectionType};
use crate::sink::{Level, MemorySink};

fn dispatch_all(tokens: &[&str]) -> (Invocation, MemorySink) {
    let sink = MemorySink::new();
    let mut invocation = Invocation::default();
    for token in tokens {
        dispatch::apply_token(&mut invocation, token, &sink);
    }
    (invocation, sink)
}

fn invocation_with_inputs() -> Invocation {
    Invocation {
        input_paths: vec![Utf8PathBuf::from("a.jpg")],
        ..Invocation::default()
    }
}

#[test]
fn boolean_flags_set_their_fields() {
    let (invocation, _) = dispatch_all(&["--gui", "--help", "--version"]);
    assert!(invocation.should_run_gui);
    assert!(invocation.should_print_help);
    assert!(invocation.should_print_version);
}

#[test]
fn metadata_flags_toggle_in_encounter_order() {
    let (invocation, _) = dispatch_all(&["--copy-metadata", "--no-copy-metadata"]);
    assert_eq!(invocation.should_copy_metadata, Some(false));
}

#[test]
fn valued_flags_route_to_their_fields() {
    let (invocation, _) = dispatch_all(&[
        "--output=pano.jpg",
        "--projection=rectilinear",
        "--matching-type=single",
        "--match-threshold=70",
        "--min-shift=12.5",
        "--jpeg-quality=90",
        "--png-compression=7",
        "--wave-correction=vertical",
        "--max-pano-mpx=250",
    ]);
    assert_eq!(invocation.output_path, Some(Utf8PathBuf::from("pano.jpg")));
    assert_eq!(
        invocation.projection,
        Some(ProjectionType::CompressedRectilinear)
    );
    assert_eq!(invocation.matching_type, Some(MatchingType::SinglePano));
    assert_eq!(invocation.match_threshold, Some(70));
    assert_eq!(invocation.min_shift, Some(12.5));
    assert_eq!(invocation.jpeg_quality, Some(90));
    assert_eq!(invocation.png_compression, Some(7));
    assert_eq!(
        invocation.wave_correction,
        Some(WaveCorrectionType::Vertical)
    );
    assert_eq!(invocation.max_pano_mpx, Some(250));
}

#[test]
fn unparseable_values_leave_fields_unset_without_aborting() {
    let (invocation, _) = dispatch_all(&[
        "--jpeg-quality=high",
        "--projection=flat",
        "--min-shift=1.2.3",
        "--png-compression=7",
    ]);
    assert_eq!(invocation.jpeg_quality, None);
    assert_eq!(invocation.projection, None);
    assert_eq!(invocation.min_shift, None);
    // the bad values above must not swallow the token after them
    assert_eq!(invocation.png_compression, Some(7));
}

#[test]
fn invalid_matching_type_warns_and_names_the_literals() {
    let (invocation, sink) = dispatch_all(&["--matching-type=bogus"]);
    assert_eq!(invocation.matching_type, None);
    let warnings = sink.messages_at(Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("'bogus'"));
    assert!(warnings[0].contains("auto, single, none"));
}

#[rstest]
#[case("--projection=flat")]
#[case("--wave-correction=diagonal")]
fn other_enum_flags_fail_silently(#[case] token: &str) {
    let (_, sink) = dispatch_all(&[token]);
    assert!(sink.entries().is_empty());
}

#[test]
fn unrecognised_tokens_become_positional_paths_in_order() {
    let (invocation, _) = dispatch_all(&["img2.jpg", "--gui=yes", "img1.jpg", "img1.jpg"]);
    // `--gui=yes` matches no flag literal, so it rides along as a path until
    // the extension filter drops it
    let expected: Vec<Utf8PathBuf> = ["img2.jpg", "--gui=yes", "img1.jpg", "img1.jpg"]
        .into_iter()
        .map(Utf8PathBuf::from)
        .collect();
    assert_eq!(invocation.input_paths, expected);
}

#[test]
fn empty_flag_values_behave_like_their_parsers() {
    let (invocation, _) = dispatch_all(&["--output=", "--match-threshold="]);
    assert_eq!(invocation.output_path, Some(Utf8PathBuf::from("")));
    assert_eq!(invocation.match_threshold, None);
}

#[rstest]
#[case("42", Some(42))]
#[case("-7", Some(-7))]
#[case("", None)]
#[case("12abc", None)]
#[case("1.5", None)]
#[case("0x10", None)]
fn decimal_parsing_is_all_or_nothing(#[case] input: &str, #[case] expected: Option<i32>) {
    assert_eq!(value::parse_decimal(input), expected);
}

#[rstest]
#[case("2.5", Some(2.5))]
#[case("2.5e1", Some(25.0))]
#[case("-0.5", Some(-0.5))]
#[case("", None)]
#[case("1.0x", None)]
#[case("one", None)]
fn float_parsing_is_all_or_nothing(#[case] input: &str, #[case] expected: Option<f32>) {
    assert_eq!(value::parse_float(input), expected);
}

#[test]
fn output_without_inputs_is_rejected_first() {
    let invocation = Invocation {
        output_path: Some(Utf8PathBuf::from("pano.xyz")),
        should_run_gui: true,
        match_threshold: Some(0),
        ..Invocation::default()
    };
    // three later rules are also violated; rule order picks this one
    assert_eq!(
        validate::validate(&invocation),
        Err(ValidationError::OutputWithoutInputs)
    );
}

#[test]
fn unsupported_output_extension_is_rejected_before_the_gui_conflict() {
    let invocation = Invocation {
        output_path: Some(Utf8PathBuf::from("pano.xyz")),
        should_run_gui: true,
        ..invocation_with_inputs()
    };
    assert_eq!(
        validate::validate(&invocation),
        Err(ValidationError::UnsupportedOutputExtension {
            extension: "xyz".to_owned()
        })
    );
}

#[test]
fn gui_and_output_are_mutually_exclusive() {
    let invocation = Invocation {
        output_path: Some(Utf8PathBuf::from("pano.jpg")),
        should_run_gui: true,
        ..invocation_with_inputs()
    };
    assert_eq!(
        validate::validate(&invocation),
        Err(ValidationError::OutputWithGui)
    );
}

#[test]
fn zero_match_threshold_is_rejected_before_the_range_rule() {
    let invocation = Invocation {
        match_threshold: Some(0),
        ..Invocation::default()
    };
    assert_eq!(
        validate::validate(&invocation),
        Err(ValidationError::ZeroMatchThreshold)
    );
}

#[rstest]
#[case(Some(4), None)]
#[case(Some(250), None)]
#[case(Some(3), Some(ValidationError::MatchThresholdOutOfRange { min: 4, max: 250 }))]
#[case(Some(251), Some(ValidationError::MatchThresholdOutOfRange { min: 4, max: 250 }))]
fn match_threshold_bounds_are_inclusive(
    #[case] threshold: Option<i32>,
    #[case] expected: Option<ValidationError>,
) {
    let invocation = Invocation {
        match_threshold: threshold,
        ..Invocation::default()
    };
    assert_eq!(validate::validate(&invocation).err(), expected);
}

#[rstest]
#[case(100, None)]
#[case(101, Some(ValidationError::JpegQualityOutOfRange { max: 100 }))]
#[case(-1, Some(ValidationError::JpegQualityOutOfRange { max: 100 }))]
fn jpeg_quality_bounds_are_inclusive(
    #[case] quality: i32,
    #[case] expected: Option<ValidationError>,
) {
    let invocation = Invocation {
        jpeg_quality: Some(quality),
        ..Invocation::default()
    };
    assert_eq!(validate::validate(&invocation).err(), expected);
}

#[rstest]
#[case(9, None)]
#[case(10, Some(ValidationError::PngCompressionOutOfRange { max: 9 }))]
fn png_compression_bounds_are_inclusive(
    #[case] compression: i32,
    #[case] expected: Option<ValidationError>,
) {
    let invocation = Invocation {
        png_compression: Some(compression),
        ..Invocation::default()
    };
    assert_eq!(validate::validate(&invocation).err(), expected);
}

#[rstest]
#[case(200.0, None)]
#[case(200.5, Some(ValidationError::MinShiftOutOfRange { min: 0.0, max: 200.0 }))]
#[case(-0.5, Some(ValidationError::MinShiftOutOfRange { min: 0.0, max: 200.0 }))]
fn min_shift_bounds_are_inclusive(
    #[case] min_shift: f32,
    #[case] expected: Option<ValidationError>,
) {
    let invocation = Invocation {
        min_shift: Some(min_shift),
        ..Invocation::default()
    };
    assert_eq!(validate::validate(&invocation).err(), expected);
}

#[rstest]
#[case(1, None)]
#[case(5000, None)]
#[case(0, Some(ValidationError::MaxPanoMpxOutOfRange { min: 1, max: 5000 }))]
#[case(5001, Some(ValidationError::MaxPanoMpxOutOfRange { min: 1, max: 5000 }))]
fn max_pano_mpx_bounds_are_inclusive(
    #[case] mpx: i32,
    #[case] expected: Option<ValidationError>,
) {
    let invocation = Invocation {
        max_pano_mpx: Some(mpx),
        ..Invocation::default()
    };
    assert_eq!(validate::validate(&invocation).err(), expected);
}

#[test]
fn enum_fields_are_never_range_checked() {
    let invocation = Invocation {
        projection: Some(ProjectionType::Fisheye),
        matching_type: Some(MatchingType::None),
        wave_correction: Some(WaveCorrectionType::Off),
        should_copy_metadata: Some(false),
        ..Invocation::default()
    };
    assert_eq!(validate::validate(&invocation), Ok(()));
}

#[test]
fn help_renders_only_on_the_informational_channel() {
    let sink = MemorySink::new();
    render_help(&sink);
    let entries = sink.entries();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|entry| entry.level == Level::Info));
}

#[test]
fn help_names_flags_literals_bounds_and_formats() {
    let sink = MemorySink::new();
    render_help(&sink);
    let text = sink.messages_at(Level::Info).join("\n");
    for flag in [
        "--output=<path>",
        "--gui",
        "--matching-type=<type>",
        "--wave-correction=<type>",
        "--no-copy-metadata",
        "--max-pano-mpx=<N>",
    ] {
        assert!(text.contains(flag), "help is missing {flag}");
    }
    assert!(text.contains("perspective, cylindrical, spherical"));
    assert!(text.contains("Match threshold, 4 - 250 (default: 70)"));
    assert!(text.contains("JPEG quality, 0 - 100 (default: 95)"));
    assert!(text.contains("jpg, jpeg, png, tif, tiff, bmp"));
}

#[test]
fn version_line_carries_the_crate_version() {
    let sink = MemorySink::new();
    render_version(&sink);
    let lines = sink.messages_at(Level::Info);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(env!("CARGO_PKG_VERSION")));
}
