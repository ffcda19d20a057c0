//! Models are structs that represent a color in a specified color space or
//! notation. Every conversion starts from a gamma encoded [`Srgb`] color, the
//! form in which colors leave the wheel.
//!
//! ```rust
//! use chromawheel::models::{Srgb, ToXyz};
//! let orange = Srgb::from_hex("#ff8000").unwrap();
//! let lch = orange.to_lab().to_polar();    // CIE-Lch (D65).
//! let xyy = orange.to_xyz().to_xyy();      // chromaticity.
//! assert!(lch.chroma > 0.0 && xyy.is_defined());
//! ```

mod cmyk;
mod hsl;
mod hsv;
mod hwb;
mod lab;
mod rgb;
mod xyz;

pub use cmyk::*;
pub use hsl::Hsl;
pub use hsv::*;
pub use hwb::*;
pub use lab::*;
pub use rgb::*;
pub use xyz::*;
