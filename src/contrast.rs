//! WCAG 2 contrast between colors.

use std::fmt;

use crate::{
    color::Component,
    models::{Srgb, ToXyz},
};

/// Minimum ratio for large text at level AA.
pub const AA_LARGE: Component = 3.0;
/// Minimum ratio for normal text at level AA.
pub const AA_NORMAL: Component = 4.5;
/// Minimum ratio for normal text at level AAA.
pub const AAA_NORMAL: Component = 7.0;

/// The contrast ratio between two relative luminances, in `[1, 21]`. The
/// order of the arguments does not matter.
pub fn contrast_ratio(l1: Component, l2: Component) -> Component {
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// The WCAG conformance level a contrast ratio reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagLevel {
    /// Below every threshold.
    Fail,
    /// Sufficient for large text only.
    AaLarge,
    /// Sufficient for normal text at level AA.
    Aa,
    /// Sufficient for normal text at level AAA.
    Aaa,
}

impl WcagLevel {
    /// Grade a contrast ratio.
    pub fn grade(ratio: Component) -> Self {
        if ratio >= AAA_NORMAL {
            Self::Aaa
        } else if ratio >= AA_NORMAL {
            Self::Aa
        } else if ratio >= AA_LARGE {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fail => "Fail",
            Self::AaLarge => "AA Large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

/// Contrast of a color against white and black text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accessibility {
    /// Relative luminance, `[0, 1]`.
    pub luminance: Component,
    /// Contrast ratio against white.
    pub contrast_white: Component,
    /// Contrast ratio against black.
    pub contrast_black: Component,
    /// Level reached against white.
    pub level_white: WcagLevel,
    /// Level reached against black.
    pub level_black: WcagLevel,
    /// The text color with the higher contrast. Ties go to black.
    pub text_color: Srgb,
}

impl Accessibility {
    /// Measure a color.
    pub fn new(color: &Srgb) -> Self {
        let luminance = color.to_xyz().luminance();
        let contrast_white = contrast_ratio(luminance, 1.0);
        let contrast_black = contrast_ratio(luminance, 0.0);

        Self {
            luminance,
            contrast_white,
            contrast_black,
            level_white: WcagLevel::grade(contrast_white),
            level_black: WcagLevel::grade(contrast_black),
            text_color: if contrast_white > contrast_black {
                Srgb::WHITE
            } else {
                Srgb::BLACK
            },
        }
    }
}
