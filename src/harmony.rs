//! Harmony sets: hue angles in a fixed relationship to a base hue.

use std::fmt;
use std::str::FromStr;

use crate::{color::Component, error::Error, math::normalize_hue};

/// The kinds of harmony. The string forms are stable identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// The base and the opposite hue.
    Complementary,
    /// The base and the two neighbours of its complement.
    SplitComplementary,
    /// The base flanked by its neighbours 30° away.
    Analogous,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues forming a rectangle on the wheel.
    Tetradic,
}

impl Harmony {
    /// All kinds, in presentation order.
    pub const ALL: [Harmony; 5] = [
        Self::Complementary,
        Self::SplitComplementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
    ];

    /// The stable identifier of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::SplitComplementary => "Split Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
        }
    }

    /// Labels and hue offsets relative to the base, in order.
    fn offsets(&self) -> &'static [(&'static str, Component)] {
        match self {
            Self::Complementary => &[("Base", 0.0), ("Comp", 180.0)],
            Self::SplitComplementary => &[("Base", 0.0), ("Split-1", 150.0), ("Split-2", 210.0)],
            Self::Analogous => &[("Ana-1", -30.0), ("Base", 0.0), ("Ana-2", 30.0)],
            Self::Triadic => &[("Tri-1", 0.0), ("Tri-2", 120.0), ("Tri-3", 240.0)],
            Self::Tetradic => &[
                ("Tet-1", 0.0),
                ("Tet-2", 60.0),
                ("Tet-3", 180.0),
                ("Tet-4", 240.0),
            ],
        }
    }

    /// The angles of this harmony around `base`, normalized into `[0, 360)`.
    pub fn angles(&self, base: Component) -> Vec<HarmonyAngle> {
        self.offsets()
            .iter()
            .map(|&(label, offset)| HarmonyAngle {
                label,
                angle: normalize_hue(base + offset),
            })
            .collect()
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Harmony {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| Error::UnknownHarmony(s.to_string()))
    }
}

/// A labelled angle of a harmony set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarmonyAngle {
    /// The role of this angle within the set, e.g. `Comp`.
    pub label: &'static str,
    /// The angle in degrees, `[0, 360)`.
    pub angle: Component,
}

/// The angles of the given harmony around `base`.
pub fn harmony_angles(base: Component, kind: Harmony) -> Vec<HarmonyAngle> {
    kind.angles(base)
}
