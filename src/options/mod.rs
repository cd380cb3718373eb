//! Option enums resolved from `--name=value` flag values.
//!
//! Each enum carries an explicit literal→variant table. Resolution either
//! matches a literal exactly (case-sensitive) or yields no value; choosing a
//! default for an absent value is the downstream pipeline's business, not
//! ours.

use serde::{Deserialize, Serialize};


fn join_literals<T>(table: &[(&'static str, T)]) -> String {
    table
        .iter()
        .map(|&(literal, _)| literal)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Projection applied when compositing the final panorama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectionType {
    /// Flat, rectilinear projection.
    Perspective,
    /// Projection onto a cylinder.
    Cylindrical,
    /// Projection onto a sphere.
    Spherical,
    /// Fisheye projection.
    Fisheye,
    /// Stereographic ("little planet") projection.
    Stereographic,
    /// Compressed rectilinear projection; selected by the `rectilinear`
    /// literal on the command line.
    CompressedRectilinear,
    /// Panini projection.
    Panini,
    /// Mercator projection.
    Mercator,
    /// Transverse Mercator projection.
    TransverseMercator,
}

impl ProjectionType {
    /// Literal→variant table used by the resolver and the help renderer.
    pub const LITERALS: [(&'static str, Self); 9] = [
        ("perspective", Self::Perspective),
        ("cylindrical", Self::Cylindrical),
        ("spherical", Self::Spherical),
        ("fisheye", Self::Fisheye),
        ("stereographic", Self::Stereographic),
        ("rectilinear", Self::CompressedRectilinear),
        ("panini", Self::Panini),
        ("mercator", Self::Mercator),
        ("transverse-mercator", Self::TransverseMercator),
    ];

    /// Resolves a command-line literal, yielding no value when unmatched.
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::LITERALS
            .iter()
            .find(|&&(name, _)| name == literal)
            .map(|&(_, variant)| variant)
    }

    /// Returns the command-line literal selecting this variant.
    #[must_use]
    pub const fn as_literal(self) -> &'static str {
        match self {
            Self::Perspective => "perspective",
            Self::Cylindrical => "cylindrical",
            Self::Spherical => "spherical",
            Self::Fisheye => "fisheye",
            Self::Stereographic => "stereographic",
            Self::CompressedRectilinear => "rectilinear",
            Self::Panini => "panini",
            Self::Mercator => "mercator",
            Self::TransverseMercator => "transverse-mercator",
        }
    }

    /// Comma-separated list of the accepted literals.
    #[must_use]
    pub fn literal_list() -> String {
        join_literals(&Self::LITERALS)
    }
}

/// How input images are grouped into panoramas before stitching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchingType {
    /// Pairwise matching across all inputs.
    Auto,
    /// Assume every input belongs to one panorama; selected by the `single`
    /// literal on the command line.
    SinglePano,
    /// Skip matching entirely.
    None,
}

impl MatchingType {
    /// Literal→variant table used by the resolver and the help renderer.
    pub const LITERALS: [(&'static str, Self); 3] = [
        ("auto", Self::Auto),
        ("single", Self::SinglePano),
        ("none", Self::None),
    ];

    /// Resolves a command-line literal, yielding no value when unmatched.
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::LITERALS
            .iter()
            .find(|&&(name, _)| name == literal)
            .map(|&(_, variant)| variant)
    }

    /// Returns the command-line literal selecting this variant.
    #[must_use]
    pub const fn as_literal(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::SinglePano => "single",
            Self::None => "none",
        }
    }

    /// Comma-separated list of the accepted literals.
    #[must_use]
    pub fn literal_list() -> String {
        join_literals(&Self::LITERALS)
    }
}

/// Wave correction applied to straighten the stitched panorama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaveCorrectionType {
    /// No wave correction.
    Off,
    /// Pick the correction direction automatically.
    Auto,
    /// Correct along the horizontal axis.
    Horizontal,
    /// Correct along the vertical axis.
    Vertical,
}

impl WaveCorrectionType {
    /// Literal→variant table used by the resolver and the help renderer.
    pub const LITERALS: [(&'static str, Self); 4] = [
        ("off", Self::Off),
        ("auto", Self::Auto),
        ("horizontal", Self::Horizontal),
        ("vertical", Self::Vertical),
    ];

    /// Resolves a command-line literal, yielding no value when unmatched.
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::LITERALS
            .iter()
            .find(|&&(name, _)| name == literal)
            .map(|&(_, variant)| variant)
    }

    /// Returns the command-line literal selecting this variant.
    #[must_use]
    pub const fn as_literal(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Auto => "auto",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Comma-separated list of the accepted literals.
    #[must_use]
    pub fn literal_list() -> String {
        join_literals(&Self::LITERALS)
    }
}
