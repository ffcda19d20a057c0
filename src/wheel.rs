//! Geometry of the procedural color wheel.
//!
//! Angles are measured in degrees clockwise from the top of the wheel. The
//! color field is the annulus between the inner and outer radius; everything
//! else is white.

use crate::{
    color::Component,
    error::{Error, Result},
    math::{clamp_unit, normalize_hue},
    models::{Hsl, Srgb},
};

/// The side length of the reference wheel, in pixels.
pub const DEFAULT_SIZE: u32 = 1600;

/// Outer radius of the color field as a fraction of the side length.
pub const OUTER_RADIUS_RATIO: Component = 0.47;

/// Inner radius (the hole) as a fraction of the side length.
pub const INNER_RADIUS_RATIO: Component = 0.09;

/// Normalized radius above which the outer rim boost kicks in.
const RIM_START: Component = 0.84;

/// A point on the wheel in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal position, growing to the right.
    pub x: Component,
    /// Vertical position, growing downwards.
    pub y: Component,
}

impl Point {
    /// Create a new point.
    pub fn new(x: Component, y: Component) -> Self {
        Self { x, y }
    }
}

impl From<(Component, Component)> for Point {
    fn from((x, y): (Component, Component)) -> Self {
        Self::new(x, y)
    }
}

/// The dimensions of a wheel: a square of `size` pixels with the color field
/// between `inner_radius` and `outer_radius` around the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGeometry {
    size: u32,
    center: Point,
    inner_radius: Component,
    outer_radius: Component,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl WheelGeometry {
    /// A wheel with the reference proportions for the given side length.
    pub fn new(size: u32) -> Self {
        let side = Component::from(size);
        Self {
            size,
            center: Point::new(side / 2.0, side / 2.0),
            inner_radius: side * INNER_RADIUS_RATIO,
            outer_radius: side * OUTER_RADIUS_RATIO,
        }
    }

    /// A wheel with explicit radii. The band must be non-empty and fit inside
    /// the square.
    pub fn with_radii(size: u32, inner_radius: Component, outer_radius: Component) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidGeometry("size must be positive".to_string()));
        }

        let half = Component::from(size) / 2.0;
        if !(inner_radius >= 0.0 && inner_radius < outer_radius) {
            return Err(Error::InvalidGeometry(format!(
                "inner radius {} must be in [0, {})",
                inner_radius, outer_radius
            )));
        }
        if outer_radius > half {
            return Err(Error::InvalidGeometry(format!(
                "outer radius {} exceeds half the size {}",
                outer_radius, half
            )));
        }

        Ok(Self {
            size,
            center: Point::new(half, half),
            inner_radius,
            outer_radius,
        })
    }

    /// The side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The center of the wheel.
    pub fn center(&self) -> Point {
        self.center
    }

    /// The radius of the hole in the middle.
    pub fn inner_radius(&self) -> Component {
        self.inner_radius
    }

    /// The radius of the outer boundary of the color field.
    pub fn outer_radius(&self) -> Component {
        self.outer_radius
    }

    /// The wheel angle of a point: 0 at the top, increasing clockwise.
    pub fn theta(&self, point: Point) -> Component {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        normalize_hue(dx.atan2(-dy).to_degrees())
    }

    /// The distance of a point from the center.
    pub fn radius(&self, point: Point) -> Component {
        (point.x - self.center.x).hypot(point.y - self.center.y)
    }

    /// True when a radius lies within the color field, bounds included.
    pub fn contains_radius(&self, radius: Component) -> bool {
        self.inner_radius <= radius && radius <= self.outer_radius
    }

    /// True when a point lies within the color field.
    pub fn contains(&self, point: Point) -> bool {
        self.contains_radius(self.radius(point))
    }

    /// The point at the given wheel angle and radius. The inverse of
    /// [`Self::theta`] and [`Self::radius`].
    pub fn point_at(&self, angle: Component, radius: Component) -> Point {
        let angle = angle.to_radians();
        Point::new(
            self.center.x + radius * angle.sin(),
            self.center.y - radius * angle.cos(),
        )
    }

    /// The radial profile: HSL of the color at the given angle and radius.
    /// Radii outside the field are clamped onto its edges. An empty band, as
    /// in `WheelGeometry::new(0)`, has the inner edge color.
    pub fn profile(&self, angle: Component, radius: Component) -> Hsl {
        let band = self.outer_radius - self.inner_radius;
        let f = if band > 0.0 {
            clamp_unit((radius - self.inner_radius) / band)
        } else {
            0.0
        };

        let saturation = clamp_unit(f.powf(1.25));
        let lightness = clamp_unit(0.92 - 0.42 * f.powf(0.85));

        let (saturation, lightness) = if f > RIM_START {
            let boost = (f - RIM_START) / (1.0 - RIM_START);
            (
                clamp_unit(saturation + 0.22 * boost),
                clamp_unit(lightness - 0.06 * boost),
            )
        } else {
            (saturation, lightness)
        };

        Hsl::new(normalize_hue(angle), saturation, lightness)
    }

    /// The color at the given angle and radius; white outside the field. This
    /// is what the raster holds at the corresponding pixel.
    pub fn color_at(&self, angle: Component, radius: Component) -> Srgb {
        if self.contains_radius(radius) {
            self.profile(angle, radius).to_srgb()
        } else {
            Srgb::WHITE
        }
    }

    /// The color at a point; white outside the field.
    pub fn color_at_point(&self, point: Point) -> Srgb {
        self.color_at(self.theta(point), self.radius(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn wheel() -> WheelGeometry {
        WheelGeometry::with_radii(200, 20.0, 90.0).unwrap()
    }

    #[test]
    fn theta_is_clockwise_from_top() {
        let w = wheel();
        assert_abs_diff_eq!(w.theta(Point::new(100.0, 50.0)), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w.theta(Point::new(150.0, 100.0)), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w.theta(Point::new(100.0, 150.0)), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w.theta(Point::new(50.0, 100.0)), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w.theta(Point::new(150.0, 50.0)), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn radius_and_containment() {
        let w = wheel();
        assert_abs_diff_eq!(w.radius(Point::new(130.0, 140.0)), 50.0, epsilon = 1e-12);
        assert!(w.contains(Point::new(100.0, 80.0)));
        assert!(w.contains(Point::new(100.0, 10.0)));
        assert!(!w.contains(Point::new(100.0, 100.0)));
        assert!(!w.contains(Point::new(100.0, 5.0)));
        assert!(w.contains_radius(20.0) && w.contains_radius(90.0));
    }

    #[test]
    fn point_at_inverts_theta_and_radius() {
        let w = wheel();
        for angle in [0.0, 33.0, 90.0, 181.5, 270.0, 359.0] {
            let p = w.point_at(angle, 60.0);
            assert_abs_diff_eq!(w.radius(p), 60.0, epsilon = 1e-9);
            assert_abs_diff_eq!(w.theta(p), angle, epsilon = 1e-9);
        }
    }

    #[test]
    fn profile_edges() {
        let w = wheel();

        let inner = w.profile(0.0, 20.0);
        assert_eq!(inner.saturation, 0.0);
        assert_abs_diff_eq!(inner.lightness, 0.92);

        let outer = w.profile(0.0, 90.0);
        assert_abs_diff_eq!(outer.saturation, 1.0);
        assert_abs_diff_eq!(outer.lightness, 0.92 - 0.42 - 0.06, epsilon = 1e-12);
    }

    #[test]
    fn empty_band_uses_inner_edge_color() {
        let w = WheelGeometry::new(0);
        assert_eq!(w.inner_radius(), w.outer_radius());

        let hsl = w.profile(0.0, 0.0);
        assert_eq!(hsl.saturation, 0.0);
        assert_abs_diff_eq!(hsl.lightness, 0.92);

        let rgb = w.color_at(0.0, 0.0);
        assert_eq!(rgb, wheel().color_at(0.0, 20.0));
        assert_ne!(rgb.to_hex(), "#000000");
    }

    #[test]
    fn profile_below_rim_has_no_boost() {
        let w = wheel();
        // f = 0.5
        let hsl = w.profile(200.0, 55.0);
        assert_abs_diff_eq!(hsl.saturation, 0.5f64.powf(1.25), epsilon = 1e-12);
        assert_abs_diff_eq!(hsl.lightness, 0.92 - 0.42 * 0.5f64.powf(0.85), epsilon = 1e-12);
        assert_eq!(hsl.hue, 200.0);
    }

    #[test]
    fn color_outside_is_white() {
        let w = wheel();
        assert_eq!(w.color_at(10.0, 5.0), Srgb::WHITE);
        assert_eq!(w.color_at(10.0, 95.0), Srgb::WHITE);
        assert_eq!(w.color_at_point(Point::new(0.0, 0.0)), Srgb::WHITE);
    }

    #[test]
    fn outer_rim_is_saturated() {
        let w = wheel();
        let top = w.color_at(0.0, 90.0);
        assert!(top.red > top.green && top.red > top.blue);
        let right = w.color_at(120.0, 90.0);
        assert!(right.green > right.red && right.green > right.blue);
    }

    #[test]
    fn invalid_geometry() {
        assert!(WheelGeometry::with_radii(0, 1.0, 2.0).is_err());
        assert!(WheelGeometry::with_radii(100, 30.0, 30.0).is_err());
        assert!(WheelGeometry::with_radii(100, -1.0, 30.0).is_err());
        assert!(WheelGeometry::with_radii(100, 10.0, 51.0).is_err());
        assert!(WheelGeometry::with_radii(100, Component::NAN, 30.0).is_err());
        assert!(WheelGeometry::with_radii(100, 0.0, 50.0).is_ok());
    }

    #[test]
    fn reference_defaults() {
        let w = WheelGeometry::default();
        assert_eq!(w.size(), 1600);
        assert_eq!(w.center(), Point::new(800.0, 800.0));
        assert_abs_diff_eq!(w.outer_radius(), 752.0, epsilon = 1e-9);
        assert_abs_diff_eq!(w.inner_radius(), 144.0, epsilon = 1e-9);
    }
}
