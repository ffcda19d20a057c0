//! Painter-friendly descriptions of a color: hue family, temperature and
//! Munsell-like value and chroma proxies.

use std::fmt;

use crate::{
    color::Component,
    math::normalize_hue,
    models::{Lab, Lch},
};

/// Hue family names, one per 22.5° bin, starting at red.
pub const HUE_NAMES: [&str; 16] = [
    "Red",
    "Vermilion",
    "Orange",
    "Amber",
    "Yellow",
    "Chartreuse",
    "Green",
    "Spring Green",
    "Cyan",
    "Azure",
    "Blue",
    "Indigo",
    "Violet",
    "Purple",
    "Magenta",
    "Rose",
];

const BIN_WIDTH: Component = 360.0 / HUE_NAMES.len() as Component;

/// The hue family name of an angle. Each name is centered on its angle.
pub fn hue_name(theta: Component) -> &'static str {
    let bin = ((normalize_hue(theta) + BIN_WIDTH / 2.0) / BIN_WIDTH).floor() as usize;
    HUE_NAMES[bin % HUE_NAMES.len()]
}

/// The perceived temperature of a hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Temperature {
    /// Reds, oranges and yellows.
    Warm,
    /// Greens through blues.
    Cool,
    /// Transitional hues between the two.
    Neutral,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warm => "Warm",
            Self::Cool => "Cool",
            Self::Neutral => "Neutral",
        })
    }
}

/// Classify a hue angle. The warm and cool ranges deliberately leave gaps
/// which are reported as neutral.
pub fn temperature(theta: Component) -> Temperature {
    let t = normalize_hue(theta);
    if (t >= 315.0 || t < 120.0) && !(75.0..105.0).contains(&t) {
        Temperature::Warm
    } else if (150.0..285.0).contains(&t) {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

/// Munsell-like value in `[0, 10]` from CIE-Lab lightness.
pub fn value_proxy(lightness: Component) -> Component {
    (lightness / 10.0).clamp(0.0, 10.0)
}

/// Munsell-like chroma, capped at 20, from CIE-Lch chroma.
pub fn chroma_proxy(chroma: Component) -> Component {
    (chroma / 8.0).min(20.0)
}

/// The artist descriptors of a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Descriptors {
    /// Hue family name.
    pub hue_name: &'static str,
    /// Warm, cool or neutral.
    pub temperature: Temperature,
    /// Value proxy, `[0, 10]`.
    pub value: Component,
    /// Chroma proxy, `[0, 20]`.
    pub chroma: Component,
}

impl Descriptors {
    /// Describe a color from its hue angle and its CIE-Lab and Lch forms.
    pub fn new(hue: Component, lab: &Lab, lch: &Lch) -> Self {
        Self {
            hue_name: hue_name(hue),
            temperature: temperature(hue),
            value: value_proxy(lab.lightness),
            chroma: chroma_proxy(lch.chroma),
        }
    }
}
