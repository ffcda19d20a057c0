//! Model a color in the CIE-XYZ color space with a D65 white point, and the
//! chromaticity coordinates derived from it.

use crate::{
    color::{Component, Components},
    math::clamp_unit,
};

/// Sums at or below this value make chromaticity undefined.
const DEGENERATE: Component = 1e-12;

/// The D65 reference white used by the CIE-Lab conversion.
pub const D65_WHITE_POINT: Components = Components(0.95047, 1.0, 1.08883);

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ (D65).
    fn to_xyz(&self) -> XyzD65;
}

chromawheel_macros::gen_model! {
    /// A color in the CIE-XYZ color space with a D65 white point. `y` is the
    /// relative luminance, 1 for the reference white.
    pub struct XyzD65 {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl XyzD65 {
    /// The WCAG relative luminance: Y clamped into `[0, 1]`.
    pub fn luminance(&self) -> Component {
        clamp_unit(self.y)
    }

    /// The xyY chromaticity. `x` and `y` are NaN for black.
    pub fn to_xyy(&self) -> Xyy {
        let sum = self.x + self.y + self.z;
        if sum <= DEGENERATE {
            return Xyy::new(Component::NAN, Component::NAN, self.y);
        }

        Xyy::new(self.x / sum, self.y / sum, self.y)
    }

    /// The CIE 1976 u′v′ chromaticity. Both are NaN for black.
    pub fn to_uv_prime(&self) -> UvPrime {
        let denominator = self.x + 15.0 * self.y + 3.0 * self.z;
        if denominator <= DEGENERATE {
            return UvPrime::new(Component::NAN, Component::NAN);
        }

        UvPrime::new(4.0 * self.x / denominator, 9.0 * self.y / denominator)
    }
}

chromawheel_macros::gen_model! {
    /// CIE xyY: two chromaticity coordinates and the luminance.
    pub struct Xyy {
        /// The x chromaticity coordinate.
        x: Component,
        /// The y chromaticity coordinate.
        y: Component,
        /// The luminance, Y.
        luminance: Component,
    }
}

impl Xyy {
    /// True when the chromaticity coordinates are defined.
    pub fn is_defined(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Correlated color temperature in kelvin using McCamy's cubic
    /// approximation. NaN when the chromaticity is undefined.
    pub fn cct(&self) -> Component {
        if !self.is_defined() {
            return Component::NAN;
        }

        let n = (self.x - 0.332) / (0.1858 - self.y);
        if !n.is_finite() {
            return Component::NAN;
        }

        ((449.0 * n + 3525.0) * n + 6823.3) * n + 5520.33
    }
}

/// The CIE 1976 UCS chromaticity coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvPrime {
    /// The u′ coordinate.
    pub u: Component,
    /// The v′ coordinate.
    pub v: Component,
}

impl UvPrime {
    /// Create new chromaticity coordinates.
    pub fn new(u: Component, v: Component) -> Self {
        Self { u, v }
    }

    /// True when both coordinates are defined.
    pub fn is_defined(&self) -> bool {
        self.u.is_finite() && self.v.is_finite()
    }
}
