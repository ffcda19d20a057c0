//! A probe of the wheel: every color space, descriptor and metric for one
//! point.

use bitflags::bitflags;

use crate::{
    color::Component,
    contrast::Accessibility,
    descriptor::Descriptors,
    math::normalize_hue,
    models::{
        Cmyk, Hsl, Hsv, Hwb, Lab, Lch, Oklab, Oklch, Srgb, SrgbLinear, ToXyz, UvPrime, Xyy, XyzD65,
    },
    wheel::{Point, WheelGeometry},
};

bitflags! {
    /// Derived values that are undefined for a color.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Undefined : u8 {
        /// The color is achromatic, its hue is 0 by convention.
        const HUE = 1 << 0;
        /// The xyY chromaticity is NaN.
        const CHROMATICITY = 1 << 1;
        /// The u′v′ chromaticity is NaN.
        const UV_PRIME = 1 << 2;
        /// The correlated color temperature is NaN.
        const CCT = 1 << 3;
    }
}

/// The color opposite a sample on the wheel, at the same radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Complement {
    /// Where the complement lies.
    pub point: Point,
    /// The wheel angle of the complement.
    pub angle: Component,
    /// The complement color.
    pub rgb: Srgb,
    /// The lowercase hex form.
    pub hex: String,
    /// CIE-Lab (D65).
    pub lab: Lab,
    /// CIE-Lch (D65).
    pub lch: Lch,
    /// CIE76 difference to the sample.
    pub delta_e76: Component,
}

/// Everything known about one point of the wheel.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// The probed point.
    pub point: Point,
    /// Wheel angle of the point.
    pub angle: Component,
    /// Distance of the point from the center.
    pub radius: Component,
    /// Whether the point lies within the color field.
    pub inside: bool,
    /// The sampled color.
    pub rgb: Srgb,
    /// Lowercase `#rrggbb`.
    pub hex: String,
    /// CSS `rgb(r g b)`.
    pub css: String,
    /// Linear light sRGB.
    pub linear: SrgbLinear,
    /// HSL notation.
    pub hsl: Hsl,
    /// HSV notation.
    pub hsv: Hsv,
    /// HWB notation.
    pub hwb: Hwb,
    /// CMYK notation.
    pub cmyk: Cmyk,
    /// CIE-XYZ (D65).
    pub xyz: XyzD65,
    /// CIE xyY.
    pub xyy: Xyy,
    /// CIE 1976 u′v′.
    pub uv: UvPrime,
    /// CIE-Lab (D65).
    pub lab: Lab,
    /// CIE-Lch (D65).
    pub lch: Lch,
    /// Oklab.
    pub oklab: Oklab,
    /// Oklch.
    pub oklch: Oklch,
    /// Artist descriptors.
    pub descriptors: Descriptors,
    /// WCAG contrast against white and black.
    pub accessibility: Accessibility,
    /// Correlated color temperature in kelvin, NaN when undefined.
    pub cct: Component,
    /// Which derived values are undefined.
    pub undefined: Undefined,
    /// The opposite color, present only for points inside the field.
    pub complement: Option<Complement>,
}

impl Sample {
    /// Describe a color read from the wheel at `point`.
    pub fn probe(geometry: &WheelGeometry, rgb: Srgb, point: Point) -> Self {
        let angle = geometry.theta(point);
        let radius = geometry.radius(point);
        let inside = geometry.contains_radius(radius);

        let hsl = rgb.to_hsl();
        let linear = rgb.to_linear_light();
        let xyz = linear.to_xyz();
        let xyy = xyz.to_xyy();
        let uv = xyz.to_uv_prime();
        let lab = Lab::from(xyz);
        let lch = lab.to_polar();
        let oklab = Oklab::from(linear);
        let cct = xyy.cct();

        let mut undefined = Undefined::empty();
        undefined.set(Undefined::HUE, rgb.is_achromatic());
        undefined.set(Undefined::CHROMATICITY, !xyy.is_defined());
        undefined.set(Undefined::UV_PRIME, !uv.is_defined());
        undefined.set(Undefined::CCT, cct.is_nan());

        let complement = inside.then(|| complement(geometry, angle, radius, &lab));

        Self {
            point,
            angle,
            radius,
            inside,
            rgb,
            hex: rgb.to_hex(),
            css: rgb.to_css(),
            linear,
            hsl,
            hsv: rgb.to_hsv(),
            hwb: rgb.to_hwb(),
            cmyk: rgb.to_cmyk(),
            xyz,
            xyy,
            uv,
            lab,
            lch,
            oklab,
            oklch: oklab.to_polar(),
            descriptors: Descriptors::new(hsl.hue, &lab, &lch),
            accessibility: Accessibility::new(&rgb),
            cct,
            undefined,
            complement,
        }
    }

    /// Probe the wheel analytically at an angle and radius, without a raster.
    pub fn probe_at(geometry: &WheelGeometry, angle: Component, radius: Component) -> Self {
        let point = geometry.point_at(angle, radius);
        Self::probe(geometry, geometry.color_at(angle, radius), point)
    }
}

fn complement(
    geometry: &WheelGeometry,
    angle: Component,
    radius: Component,
    lab: &Lab,
) -> Complement {
    let angle = normalize_hue(angle + 180.0);
    let rgb = geometry.color_at(angle, radius);
    let complement_lab = rgb.to_lab();

    Complement {
        point: geometry.point_at(angle, radius),
        angle,
        rgb,
        hex: rgb.to_hex(),
        lab: complement_lab,
        lch: complement_lab.to_polar(),
        delta_e76: lab.delta_e76(&complement_lab),
    }
}
