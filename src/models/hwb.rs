//! Model a color with the HWB notation in the sRGB color space.

use crate::{
    color::Component,
    math::clamp_unit,
    models::{hsv::Hsv, rgb::Srgb},
};

chromawheel_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    pub struct Hwb {
        /// The hue component of the color, in degrees `[0, 360)`.
        hue: Component,
        /// The whiteness component of the color, in `[0, 1]`.
        whiteness: Component,
        /// The blackness component of the color, in `[0, 1]`.
        blackness: Component,
    }
}

impl From<Srgb> for Hwb {
    fn from(value: Srgb) -> Self {
        let hsv = value.to_hsv();
        let whiteness = value.to_components().min() / 255.0;
        Hwb::new(hsv.hue, whiteness, 1.0 - hsv.value)
    }
}

impl Hwb {
    /// Convert to sRGB. When whiteness and blackness add up to one or more
    /// the result is the gray they normalize to.
    pub fn to_srgb(&self) -> Srgb {
        let whiteness = clamp_unit(self.whiteness);
        let blackness = clamp_unit(self.blackness);

        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness) * 255.0;
            return Srgb::new(gray, gray, gray).rounded();
        }

        let value = 1.0 - blackness;
        Hsv::new(self.hue, 1.0 - whiteness / value, value).to_srgb()
    }
}

impl Srgb {
    /// Convert to the HWB notation.
    pub fn to_hwb(&self) -> Hwb {
        Hwb::from(*self)
    }
}
