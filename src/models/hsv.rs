//! Model a color with the HSV notation in the sRGB color space.

use crate::{
    color::Component,
    math::{almost_zero, clamp_unit},
    models::{
        hsl::{from_hue_chroma, hue, unit_channels},
        rgb::Srgb,
    },
};

chromawheel_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv {
        /// The hue component of the color, in degrees `[0, 360)`.
        hue: Component,
        /// The saturation component of the color, in `[0, 1]`.
        saturation: Component,
        /// The value component of the color, in `[0, 1]`.
        value: Component,
    }
}

impl From<Srgb> for Hsv {
    fn from(value: Srgb) -> Self {
        let (unit, max, chroma) = unit_channels(&value);
        let saturation = if almost_zero(max) { 0.0 } else { chroma / max };

        Hsv::new(hue(&unit, max, chroma), saturation, max)
    }
}

impl Hsv {
    /// Convert to sRGB. Channels are rounded to integers.
    pub fn to_srgb(&self) -> Srgb {
        let value = clamp_unit(self.value);
        let chroma = value * clamp_unit(self.saturation);
        from_hue_chroma(self.hue, chroma, value - chroma)
    }
}

impl Srgb {
    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::from(*self)
    }
}
