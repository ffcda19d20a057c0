//! An in-memory palette of collected swatches, newest first.
//!
//! The palette has a single owner; every mutation takes `&mut self`.

use std::fmt::Write;

use crate::{
    descriptor::hue_name,
    harmony::Harmony,
    models::{Hsl, Srgb},
    sample::Sample,
    wheel::WheelGeometry,
};

/// The most swatches a palette holds. Older ones are dropped first.
pub const PALETTE_CAPACITY: usize = 24;

/// Identifies a swatch within its palette.
pub type SwatchId = u64;

/// A color saved in a palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    /// Unique within the palette that created it.
    pub id: SwatchId,
    /// Lowercase `#rrggbb`.
    pub hex: String,
    /// The color.
    pub rgb: Srgb,
    /// The color in HSL notation.
    pub hsl: Hsl,
    /// Display name.
    pub name: String,
}

/// The display name of a color: its hue family, or `Gray` without hue.
fn color_name(rgb: &Srgb, hsl: &Hsl) -> String {
    if rgb.is_achromatic() {
        "Gray".to_string()
    } else {
        hue_name(hsl.hue).to_string()
    }
}

/// An ordered, deduplicated, bounded list of swatches.
#[derive(Clone, Debug, Default)]
pub struct Palette {
    swatches: Vec<Swatch>,
    next_id: SwatchId,
}

impl Palette {
    /// An empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    fn swatch(&mut self, rgb: Srgb, name: String) -> Swatch {
        let rgb = rgb.rounded();
        let id = self.next_id;
        self.next_id += 1;

        Swatch {
            id,
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
            name,
        }
    }

    fn contains_hex(&self, hex: &str) -> bool {
        self.swatches
            .iter()
            .any(|s| s.hex.eq_ignore_ascii_case(hex))
    }

    /// Save the color of a sample at the front, unless its hex is already
    /// present. Returns the id of the new swatch.
    pub fn add(&mut self, sample: &Sample) -> Option<SwatchId> {
        if self.contains_hex(&sample.hex) {
            tracing::trace!(hex = %sample.hex, "swatch already in palette");
            return None;
        }

        let name = color_name(&sample.rgb, &sample.hsl);
        let swatch = self.swatch(sample.rgb, name);
        let id = swatch.id;
        tracing::debug!(id, hex = %swatch.hex, "adding swatch");

        self.swatches.insert(0, swatch);
        self.swatches.truncate(PALETTE_CAPACITY);
        Some(id)
    }

    /// Save every color of a harmony around the sample, at the sample's
    /// radius. The new swatches keep harmony order at the front; duplicates
    /// keep their newest occurrence.
    pub fn add_harmony(&mut self, geometry: &WheelGeometry, sample: &Sample, kind: Harmony) {
        let mut swatches: Vec<Swatch> = kind
            .angles(sample.angle)
            .into_iter()
            .map(|harmony| {
                let rgb = geometry.color_at(harmony.angle, sample.radius).rounded();
                let name = format!("{} {}", harmony.label, color_name(&rgb, &rgb.to_hsl()));
                self.swatch(rgb, name)
            })
            .collect();
        tracing::debug!(count = swatches.len(), harmony = %kind, "adding harmony swatches");

        swatches.append(&mut self.swatches);

        let mut seen: Vec<String> = Vec::with_capacity(swatches.len());
        swatches.retain(|s| {
            let hex = s.hex.to_ascii_lowercase();
            if seen.contains(&hex) {
                tracing::trace!(hex = %hex, "dropping duplicate swatch");
                false
            } else {
                seen.push(hex);
                true
            }
        });

        swatches.truncate(PALETTE_CAPACITY);
        self.swatches = swatches;
    }

    /// Delete a swatch. Unknown ids are ignored.
    pub fn remove(&mut self, id: SwatchId) {
        let before = self.swatches.len();
        self.swatches.retain(|s| s.id != id);
        if self.swatches.len() != before {
            tracing::debug!(id, "removed swatch");
        }
    }

    /// Delete all swatches.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.swatches.len(), "clearing palette");
        self.swatches.clear();
    }

    /// The swatch with the given id.
    pub fn get(&self, id: SwatchId) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.id == id)
    }

    /// The swatches, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    /// The number of swatches.
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// True when there are no swatches.
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Render the palette as CSS custom properties, oldest first. An empty
    /// palette renders as an empty string.
    pub fn export_css(&self) -> String {
        export_css(&self.swatches)
    }
}

/// Render swatches, given newest first, as a `:root` block of custom
/// properties numbered from the oldest.
pub fn export_css(swatches: &[Swatch]) -> String {
    if swatches.is_empty() {
        return String::new();
    }

    let mut css = String::from(":root\n{\n");
    for (i, swatch) in swatches.iter().rev().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            css,
            "  --swatch-{:02}: {}; /* {} */",
            i + 1,
            swatch.hex,
            swatch.name
        );
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::Point;

    fn wheel() -> WheelGeometry {
        WheelGeometry::with_radii(400, 40.0, 190.0).unwrap()
    }

    fn sample_of(rgb: Srgb) -> Sample {
        Sample::probe(&wheel(), rgb, Point::new(200.0, 50.0))
    }

    #[test]
    fn add_deduplicates_by_hex() {
        let mut palette = Palette::new();
        let red = sample_of(Srgb::new(255.0, 0.0, 0.0));

        assert!(palette.add(&red).is_some());
        assert_eq!(palette.add(&red), None);
        assert_eq!(palette.len(), 1);

        let mut upper = red.clone();
        upper.hex = upper.hex.to_uppercase();
        assert_eq!(palette.add(&upper), None);
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn add_is_newest_first_and_bounded() {
        let mut palette = Palette::new();
        for i in 0..=PALETTE_CAPACITY {
            palette.add(&sample_of(Srgb::new(i as f64 * 10.0, 0.0, 0.0)));
        }

        assert_eq!(palette.len(), PALETTE_CAPACITY);
        let newest = palette.iter().next().unwrap();
        assert_eq!(newest.rgb, Srgb::new(240.0, 0.0, 0.0));
        assert!(palette.iter().all(|s| s.hex != "#000000"));
    }

    #[test]
    fn remove_and_clear() {
        let mut palette = Palette::new();
        let id = palette.add(&sample_of(Srgb::new(0.0, 128.0, 255.0))).unwrap();
        palette.add(&sample_of(Srgb::new(10.0, 20.0, 30.0)));

        palette.remove(9999);
        assert_eq!(palette.len(), 2);

        assert!(palette.get(id).is_some());
        palette.remove(id);
        assert_eq!(palette.len(), 1);
        assert!(palette.get(id).is_none());

        palette.clear();
        assert!(palette.is_empty());
    }

    #[test]
    fn names() {
        let mut palette = Palette::new();
        palette.add(&sample_of(Srgb::new(128.0, 128.0, 128.0)));
        palette.add(&sample_of(Srgb::new(0.0, 0.0, 255.0)));

        let names: Vec<_> = palette.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Indigo", "Gray"]);
    }

    #[test]
    fn add_harmony_prepends_in_order() {
        let w = wheel();
        let mut palette = Palette::new();
        let old = palette.add(&sample_of(Srgb::new(1.0, 2.0, 3.0))).unwrap();

        let sample = Sample::probe_at(&w, 0.0, 150.0);
        palette.add_harmony(&w, &sample, Harmony::Triadic);

        let swatches: Vec<_> = palette.iter().collect();
        assert_eq!(swatches.len(), 4);
        assert_eq!(swatches[0].rgb, w.color_at(0.0, 150.0));
        assert_eq!(swatches[1].rgb, w.color_at(120.0, 150.0));
        assert_eq!(swatches[2].rgb, w.color_at(240.0, 150.0));
        assert_eq!(swatches[3].id, old);
        assert!(swatches[0].name.starts_with("Tri-1 "));
        assert!(swatches[1].name.starts_with("Tri-2 "));
    }

    #[test]
    fn add_harmony_keeps_newest_duplicate() {
        let w = wheel();
        let mut palette = Palette::new();
        let sample = Sample::probe_at(&w, 90.0, 150.0);
        palette.add(&sample);
        let first = palette.iter().next().unwrap().id;

        palette.add_harmony(&w, &sample, Harmony::Complementary);
        assert_eq!(palette.len(), 2);
        assert!(palette.get(first).is_none());
        assert_eq!(palette.iter().next().unwrap().hex, sample.hex);
    }

    #[test]
    fn add_harmony_is_bounded() {
        let w = wheel();
        let mut palette = Palette::new();
        for i in 0..PALETTE_CAPACITY {
            palette.add(&sample_of(Srgb::new(0.0, i as f64, 0.0)));
        }
        palette.add_harmony(&w, &Sample::probe_at(&w, 10.0, 150.0), Harmony::Tetradic);
        assert_eq!(palette.len(), PALETTE_CAPACITY);
        assert!(palette.iter().take(4).all(|s| s.name.starts_with("Tet-")));
    }

    #[test]
    fn css_export() {
        assert_eq!(export_css(&[]), "");
        assert_eq!(Palette::new().export_css(), "");

        let mut palette = Palette::new();
        palette.add(&sample_of(Srgb::new(255.0, 0.0, 0.0)));
        assert_eq!(
            palette.export_css(),
            ":root\n{\n  --swatch-01: #ff0000; /* Red */\n}"
        );

        palette.add(&sample_of(Srgb::new(0.0, 0.0, 255.0)));
        assert_eq!(
            palette.export_css(),
            ":root\n{\n  --swatch-01: #ff0000; /* Red */\n  --swatch-02: #0000ff; /* Indigo */\n}"
        );
    }
}
