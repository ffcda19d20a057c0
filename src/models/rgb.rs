//! Model a color in the sRGB color space, gamma encoded or as linear light.

use crate::{
    color::{Component, Components},
    error::{Error, Result},
    math::{lerp, transform, transform_3x3, Transform},
    models::xyz::{ToXyz, XyzD65},
};

/// The sRGB transfer functions.
mod gamma {
    use crate::color::{Component, Components};

    /// Convert the components from linear light to gamma encoded, both in
    /// `[0, 1]`.
    pub fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|value: Component| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        })
    }

    /// Convert the components from gamma encoded to linear light, both in
    /// `[0, 1]`.
    pub fn to_linear_light(from: &Components) -> Components {
        from.map(|value: Component| {
            let abs = value.abs();

            if abs <= 0.04045 {
                value / 12.92
            } else {
                value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        })
    }
}

/// The largest value of an 8-bit channel.
pub const CHANNEL_MAX: Component = 255.0;

chromawheel_macros::gen_model! {
    /// A gamma encoded sRGB color. Channels are in `[0, 255]` and may be
    /// fractional before rounding.
    pub struct Srgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Srgb {
    /// Pure white.
    pub const WHITE: Srgb = Srgb {
        red: CHANNEL_MAX,
        green: CHANNEL_MAX,
        blue: CHANNEL_MAX,
    };

    /// Pure black.
    pub const BLACK: Srgb = Srgb {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    /// Create a color from 8-bit channels.
    pub fn from_bytes([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red.into(), green.into(), blue.into())
    }

    /// Parse a `#rrggbb` or `#rgb` hex string. The leading `#` is optional
    /// and digits are case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidHex(hex.to_string());

        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if !digits.is_ascii() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::from_bytes([
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ])),
            3 => {
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::from_bytes([short(0)?, short(1)?, short(2)?]))
            }
            _ => Err(invalid()),
        }
    }

    /// Every channel clamped into `[0, 255]`.
    pub fn clamped(&self) -> Self {
        self.to_components()
            .map(|v| v.clamp(0.0, CHANNEL_MAX))
            .into()
    }

    /// Every channel clamped and rounded to the nearest integer.
    pub fn rounded(&self) -> Self {
        self.clamped().to_components().map(Component::round).into()
    }

    /// The 8-bit channels of this color, clamped and rounded.
    pub fn to_bytes(&self) -> [u8; 3] {
        let Components(red, green, blue) = self.rounded().to_components();
        [red as u8, green as u8, blue as u8]
    }

    /// The lowercase `#rrggbb` form of this color.
    pub fn to_hex(&self) -> String {
        let [red, green, blue] = self.to_bytes();
        format!("#{:02x}{:02x}{:02x}", red, green, blue)
    }

    /// The CSS `rgb(r g b)` form of this color.
    pub fn to_css(&self) -> String {
        let [red, green, blue] = self.to_bytes();
        format!("rgb({} {} {})", red, green, blue)
    }

    /// True when all three channels are equal, i.e. the color has no hue.
    pub fn is_achromatic(&self) -> bool {
        let c = self.to_components();
        c.max() == c.min()
    }

    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        gamma::to_linear_light(&(self.to_components() * (1.0 / CHANNEL_MAX))).into()
    }

    /// Mix two colors in linear light. `t = 0` yields `self`, `t = 1` yields
    /// `other`. The result is rounded to integer channels.
    pub fn mix_linear(&self, other: &Srgb, t: Component) -> Srgb {
        self.to_linear_light()
            .lerp(&other.to_linear_light(), t)
            .to_gamma_encoded()
    }
}

impl ToXyz for Srgb {
    fn to_xyz(&self) -> XyzD65 {
        self.to_linear_light().to_xyz()
    }
}

chromawheel_macros::gen_model! {
    /// An sRGB color without gamma encoding. Channels are in `[0, 1]`.
    pub struct SrgbLinear {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded. Channels are
    /// rounded to the nearest integer.
    pub fn to_gamma_encoded(&self) -> Srgb {
        Srgb::from(gamma::to_gamma_encoded(&self.to_components()) * CHANNEL_MAX).rounded()
    }

    /// Interpolate per channel towards `other`.
    pub fn lerp(&self, other: &SrgbLinear, t: Component) -> SrgbLinear {
        self.to_components()
            .zip(&other.to_components(), |a, b| lerp(a, b, t))
            .into()
    }
}

impl ToXyz for SrgbLinear {
    fn to_xyz(&self) -> XyzD65 {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339,
            0.3575761, 0.7151522, 0.1191920,
            0.1804375, 0.0721750, 0.9503041,
        );

        transform(&TO_XYZ, self.to_components()).into()
    }
}
