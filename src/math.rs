//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix stored in a 4x4 transform. Matrices are applied to row
/// vectors, so the constants are written transposed.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Placeholder rendered by [`fmt_fixed`] for non-finite values.
pub const UNDEFINED: &str = "—";

/// Build a [`Transform`] from the 9 values of a 3x3 matrix.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

/// Clamp a value into `[0, 1]`. NaN passes through.
pub fn clamp_unit<T: Float>(value: T) -> T {
    num_traits::clamp(value, T::zero(), T::one())
}

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_hue(degrees: Component) -> Component {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Unclamped linear interpolation from `a` to `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Returns true if the value is within `1e-12` of zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() <= 1e-12
}

/// Render a value with a fixed number of decimals, or [`UNDEFINED`] when the
/// value is not finite.
pub fn fmt_fixed(value: Component, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        UNDEFINED.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_hue_wraps_into_range() {
        assert_eq!(normalize_hue(-1.0), 359.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert_eq!(normalize_hue(450.0), 90.0);
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(-720.0), 0.0);
        assert!(normalize_hue(-1e-15) < 360.0);
    }

    #[test]
    fn clamp_unit_saturates() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert!(clamp_unit(Component::NAN).is_nan());
    }

    #[test]
    fn lerp_is_unclamped() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(2.0, 4.0, -1.0), 0.0);
    }

    #[test]
    fn fmt_fixed_uses_placeholder_for_non_finite() {
        assert_eq!(fmt_fixed(1.23456, 2), "1.23");
        assert_eq!(fmt_fixed(Component::NAN, 2), UNDEFINED);
        assert_eq!(fmt_fixed(Component::INFINITY, 3), UNDEFINED);
    }

    #[test]
    fn transform_applies_rows_transposed() {
        #[rustfmt::skip]
        const SWAP: Transform = transform_3x3(
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 2.0,
        );
        assert_eq!(
            transform(&SWAP, Components(1.0, 2.0, 3.0)),
            Components(2.0, 1.0, 6.0)
        );
    }
}
