//! Strict typed value parsers for `--name=value` flags.
//!
//! Both parsers are all-or-nothing: the entire string must be consumed, and
//! any conversion error yields "no value" rather than escaping.

pub(super) fn parse_decimal(value: &str) -> Option<i32> {
    value.parse().ok()
}

pub(super) fn parse_float(value: &str) -> Option<f32> {
    value.parse().ok()
}
