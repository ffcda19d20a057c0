//! Errors for the few fallible entry points: configuration and parsing. The
//! color math itself is total and never fails.

use thiserror::Error;

/// Result type used by the fallible functions of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when building a wheel or parsing user input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The wheel dimensions do not describe a usable color band.
    #[error("Invalid wheel geometry: {0}")]
    InvalidGeometry(String),
    /// The string is not a `#rrggbb` or `#rgb` hex color.
    #[error("Invalid hex color `{0}`")]
    InvalidHex(String),
    /// The string does not name a harmony.
    #[error("Unknown harmony `{0}`")]
    UnknownHarmony(String),
}
