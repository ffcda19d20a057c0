//! Models for rectangular and polar coordinate systems used to model CIE-Lab,
//! CIE-Lch, Oklab and Oklch.

use crate::{
    color::{Component, Components},
    math::{normalize_hue, transform, transform_3x3, Transform},
    models::{
        rgb::{Srgb, SrgbLinear},
        xyz::{ToXyz, XyzD65, D65_WHITE_POINT},
    },
};

mod space {
    use crate::color::Component;

    pub trait Space {
        /// Chroma at or below which a color has no meaningful hue.
        const ACHROMATIC_CHROMA: Component;
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Lab;
    impl Space for Lab {
        const ACHROMATIC_CHROMA: Component = 1e-4;
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Oklab;
    impl Space for Oklab {
        const ACHROMATIC_CHROMA: Component = 1e-6;
    }
}

chromawheel_macros::gen_model! {
    /// The model for a color specified in the rectangular orthogonal form.
    pub struct Rectangular<S: space::Space> {
        /// The lightness component.
        lightness: Component,
        /// The a component.
        a: Component,
        /// The b component.
        b: Component,
    }
}

impl<S: space::Space> Rectangular<S> {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form. The hue of an achromatic color is 0.
    pub fn to_polar(&self) -> Polar<S> {
        let chroma = self.a.hypot(self.b);
        // The sRGB white point leaves grays with a tiny residual a/b.
        let hue = if chroma <= S::ACHROMATIC_CHROMA {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Polar::new(self.lightness, chroma, hue)
    }

    /// The euclidean distance to another color in the same space.
    pub fn distance(&self, other: &Self) -> Component {
        (self.to_components() - other.to_components()).length()
    }
}

chromawheel_macros::gen_model! {
    /// The model for a color specified in the cylindrical polar form.
    pub struct Polar<S: space::Space> {
        /// The lightness component.
        lightness: Component,
        /// The chroma component.
        chroma: Component,
        /// The hue component, in degrees `[0, 360)`.
        hue: Component,
    }
}

impl<S: space::Space> Polar<S> {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Rectangular<S> {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Rectangular::new(self.lightness, a, b)
    }
}

/// The model for a color specified in the CIE-Lab color space with the
/// rectangular orthogonal form.
pub type Lab = Rectangular<space::Lab>;

/// The model for a color specified in the CIE-Lab color space with the
/// cylindrical polar form.
pub type Lch = Polar<space::Lab>;

impl From<XyzD65> for Lab {
    fn from(value: XyzD65) -> Self {
        const DELTA: Component = 6.0 / 29.0;

        fn f(t: Component) -> Component {
            if t > DELTA * DELTA * DELTA {
                t.cbrt()
            } else {
                t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
            }
        }

        let Components(f0, f1, f2) = Components(
            value.x / D65_WHITE_POINT.0,
            value.y / D65_WHITE_POINT.1,
            value.z / D65_WHITE_POINT.2,
        )
        .map(f);

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

impl Lab {
    /// The CIE76 color difference.
    pub fn delta_e76(&self, other: &Lab) -> Component {
        self.distance(other)
    }
}

/// The model for a color specified in the oklab color space with the
/// rectangular orthogonal form.
pub type Oklab = Rectangular<space::Oklab>;

/// The model for a color specified in the oklab color space with the
/// cylindrical polar form.
pub type Oklch = Polar<space::Oklab>;

impl From<SrgbLinear> for Oklab {
    fn from(value: SrgbLinear) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LINEAR_TO_LMS: Transform = transform_3x3(
            0.4122214708, 0.2119034982, 0.0883024619,
            0.5363325363, 0.6806995451, 0.2817188376,
            0.0514459929, 0.1073969566, 0.6299787005,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let lms = transform(&LINEAR_TO_LMS, value.to_components());
        let lms = lms.map(|v| v.cbrt());
        transform(&LMS_TO_OKLAB, lms).into()
    }
}

impl Oklab {
    /// The deltaE OK color difference.
    pub fn delta_eok(&self, other: &Oklab) -> Component {
        self.distance(other)
    }
}

impl Srgb {
    /// Convert to CIE-Lab (D65).
    pub fn to_lab(&self) -> Lab {
        Lab::from(self.to_xyz())
    }

    /// Convert to Oklab.
    pub fn to_oklab(&self) -> Oklab {
        Oklab::from(self.to_linear_light())
    }
}
