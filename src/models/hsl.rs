//! Model a color with the HSL notation in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{almost_zero, clamp_unit, normalize_hue},
    models::rgb::{Srgb, CHANNEL_MAX},
};

chromawheel_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees `[0, 360)`.
        hue: Component,
        /// The saturation component of the color, in `[0, 1]`.
        saturation: Component,
        /// The lightness component of the color, in `[0, 1]`.
        lightness: Component,
    }
}

/// The unit channels, their maximum and the chroma (max - min).
pub(crate) fn unit_channels(rgb: &Srgb) -> (Components, Component, Component) {
    let unit = rgb.to_components() * (1.0 / CHANNEL_MAX);
    let max = unit.max();
    (unit, max, max - unit.min())
}

/// The hue shared by HSL, HSV and HWB. Zero for achromatic colors.
pub(crate) fn hue(unit: &Components, max: Component, chroma: Component) -> Component {
    if almost_zero(chroma) {
        return 0.0;
    }

    let Components(red, green, blue) = *unit;
    let sector = if max == red {
        ((green - blue) / chroma) % 6.0
    } else if max == green {
        (blue - red) / chroma + 2.0
    } else {
        (red - green) / chroma + 4.0
    };

    normalize_hue(sector * 60.0)
}

/// Build an sRGB color from a hue, a chroma and the amount to add to every
/// channel. This is the common tail of the HSL and HSV conversions.
pub(crate) fn from_hue_chroma(hue: Component, chroma: Component, offset: Component) -> Srgb {
    let sector = normalize_hue(hue) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let Components(red, green, blue) = match sector as u32 {
        0 => Components(chroma, x, 0.0),
        1 => Components(x, chroma, 0.0),
        2 => Components(0.0, chroma, x),
        3 => Components(0.0, x, chroma),
        4 => Components(x, 0.0, chroma),
        _ => Components(chroma, 0.0, x),
    };

    Srgb::from(Components(red + offset, green + offset, blue + offset) * CHANNEL_MAX).rounded()
}

impl From<Srgb> for Hsl {
    fn from(value: Srgb) -> Self {
        let (unit, max, chroma) = unit_channels(&value);
        let lightness = (max + unit.min()) / 2.0;

        let saturation = if almost_zero(chroma) {
            0.0
        } else {
            clamp_unit(chroma / (1.0 - (2.0 * lightness - 1.0).abs()))
        };

        Hsl::new(hue(&unit, max, chroma), saturation, lightness)
    }
}

impl Hsl {
    /// Convert to sRGB. Channels are rounded to integers.
    pub fn to_srgb(&self) -> Srgb {
        let saturation = clamp_unit(self.saturation);
        let lightness = clamp_unit(self.lightness);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        from_hue_chroma(self.hue, chroma, lightness - chroma / 2.0)
    }
}

impl Srgb {
    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn primaries() {
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_srgb(), Srgb::new(255.0, 0.0, 0.0));
        assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_srgb(), Srgb::new(0.0, 255.0, 0.0));
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_srgb(), Srgb::new(0.0, 0.0, 255.0));
    }

    #[test]
    fn black_and_white_for_any_hue() {
        for hue in [0.0, 42.0, 180.0, 359.9, -90.0, 720.0] {
            assert_eq!(Hsl::new(hue, 0.0, 0.0).to_srgb(), Srgb::BLACK);
            assert_eq!(Hsl::new(hue, 0.0, 1.0).to_srgb(), Srgb::WHITE);
        }
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        let hsl = Srgb::new(128.0, 128.0, 128.0).to_hsl();
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 0.0);
        assert_component_eq!(hsl.lightness, 128.0 / 255.0);
    }

    #[test]
    fn known_color() {
        // chocolate
        let hsl = Srgb::new(210.0, 105.0, 30.0).to_hsl();
        assert_component_eq!(hsl.hue, 25.0);
        assert_component_eq!(hsl.saturation, 0.75);
        assert_component_eq!(hsl.lightness, 240.0 / 510.0);
    }

    #[test]
    fn round_trip_within_one() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(51) {
                    let rgb = Srgb::from_bytes([r as u8, g as u8, b as u8]);
                    let back = rgb.to_hsl().to_srgb();
                    let d = rgb.to_components() - back.to_components();
                    assert!(
                        d.0.abs() <= 1.0 && d.1.abs() <= 1.0 && d.2.abs() <= 1.0,
                        "{:?} -> {:?}",
                        rgb,
                        back
                    );
                }
            }
        }
    }
}
