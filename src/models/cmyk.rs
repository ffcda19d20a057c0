//! Model a color with the subtractive CMYK notation.

use crate::{
    color::Component,
    math::clamp_unit,
    models::{hsl::unit_channels, rgb::Srgb},
};

/// Threshold above which the key is treated as pure black.
const BLACK_EPSILON: Component = 1e-12;

/// A color specified with the CMYK notation. All components are in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    /// The cyan component.
    pub cyan: Component,
    /// The magenta component.
    pub magenta: Component,
    /// The yellow component.
    pub yellow: Component,
    /// The key (black) component.
    pub key: Component,
}

impl Cmyk {
    /// Create a new color with the given components.
    pub fn new(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    /// Convert to sRGB. Channels are rounded to integers.
    pub fn to_srgb(&self) -> Srgb {
        let key = 1.0 - clamp_unit(self.key);
        let channel = |v: Component| (1.0 - clamp_unit(v)) * key * 255.0;
        Srgb::new(
            channel(self.cyan),
            channel(self.magenta),
            channel(self.yellow),
        )
        .rounded()
    }
}

impl From<Srgb> for Cmyk {
    fn from(value: Srgb) -> Self {
        let (unit, max, _) = unit_channels(&value);
        let key = 1.0 - max;

        if key >= 1.0 - BLACK_EPSILON {
            return Cmyk::new(0.0, 0.0, 0.0, 1.0);
        }

        let ink = |v: Component| clamp_unit((1.0 - v - key) / (1.0 - key));
        Cmyk::new(ink(unit.0), ink(unit.1), ink(unit.2), key)
    }
}

impl Srgb {
    /// Convert to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::from(*self)
    }
}
