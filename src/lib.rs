//! chromawheel synthesizes a procedural color wheel and describes any point on
//! it: the color in a range of spaces and notations, artist descriptors, WCAG
//! contrast, harmonies, tint/shade ladders and a small palette with CSS
//! export.
//!
//! ```rust
//! use chromawheel::{Harmony, Palette, Sample, WheelGeometry};
//!
//! let wheel = WheelGeometry::new(400);
//! let sample = Sample::probe_at(&wheel, 30.0, 150.0);
//!
//! let mut palette = Palette::new();
//! palette.add_harmony(&wheel, &sample, Harmony::Triadic);
//! assert!(palette.export_css().starts_with(":root"));
//! ```

#![deny(missing_docs)]

pub mod color;
pub mod contrast;
pub mod descriptor;
mod error;
pub mod harmony;
pub mod math;
pub mod models;
pub mod palette;
pub mod raster;
pub mod sample;
pub mod tints;
pub mod wheel;

#[cfg(test)]
mod test;

pub use color::{Component, Components};
pub use contrast::{contrast_ratio, Accessibility, WcagLevel};
pub use descriptor::{hue_name, temperature, Descriptors, Temperature};
pub use error::{Error, Result};
pub use harmony::{harmony_angles, Harmony, HarmonyAngle};
pub use models::Srgb;
pub use palette::{Palette, Swatch, SwatchId, PALETTE_CAPACITY};
pub use raster::Raster;
pub use sample::{Complement, Sample, Undefined};
pub use tints::{tint_shade_ladder, TintShadeStep};
pub use wheel::{Point, WheelGeometry};
