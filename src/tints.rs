//! Tints and shades: a base color mixed towards white and black in linear
//! light.

use crate::{color::Component, models::Srgb};

/// Fewest steps in a ladder.
pub const MIN_STEPS: usize = 3;
/// Most steps in a ladder.
pub const MAX_STEPS: usize = 11;

/// One rung of a tint/shade ladder.
#[derive(Clone, Debug, PartialEq)]
pub struct TintShadeStep {
    /// `Tint N%`, `Base` or `Shade N%`.
    pub label: String,
    /// The color of this step.
    pub rgb: Srgb,
    /// The lowercase hex form of the color.
    pub hex: String,
}

impl TintShadeStep {
    fn new(label: String, rgb: Srgb) -> Self {
        let hex = rgb.to_hex();
        Self { label, rgb, hex }
    }
}

/// Clamp a step count into `[3, 11]`, rounding even counts up to the next
/// odd one.
pub fn normalize_steps(steps: usize) -> usize {
    let steps = steps.clamp(MIN_STEPS, MAX_STEPS);
    if steps % 2 == 0 {
        steps + 1
    } else {
        steps
    }
}

/// Build the ladder for `base`: tints from lightest to the base, then shades
/// from the base to darkest.
pub fn tint_shade_ladder(base: &Srgb, steps: usize) -> Vec<TintShadeStep> {
    let half = normalize_steps(steps) / 2;
    let fraction = |i: usize| i as Component / (half + 1) as Component;
    let percent = |t: Component| (t * 100.0).round();

    let tints = (1..=half).rev().map(|i| {
        let t = fraction(i);
        TintShadeStep::new(
            format!("Tint {}%", percent(t)),
            base.mix_linear(&Srgb::WHITE, t),
        )
    });

    let shades = (1..=half).map(|i| {
        let t = fraction(i);
        TintShadeStep::new(
            format!("Shade {}%", percent(t)),
            base.mix_linear(&Srgb::BLACK, t),
        )
    });

    tints
        .chain(std::iter::once(TintShadeStep::new(
            "Base".to_string(),
            *base,
        )))
        .chain(shades)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_counts() {
        assert_eq!(normalize_steps(0), 3);
        assert_eq!(normalize_steps(3), 3);
        assert_eq!(normalize_steps(4), 5);
        assert_eq!(normalize_steps(10), 11);
        assert_eq!(normalize_steps(99), 11);

        let base = Srgb::new(200.0, 60.0, 20.0);
        for steps in 0..20 {
            assert_eq!(tint_shade_ladder(&base, steps).len(), normalize_steps(steps));
        }
    }

    #[test]
    fn ladder_of_five() {
        let base = Srgb::new(200.0, 60.0, 20.0);
        let ladder = tint_shade_ladder(&base, 5);

        let labels: Vec<_> = ladder.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Tint 67%", "Tint 33%", "Base", "Shade 33%", "Shade 67%"]);

        assert_eq!(ladder[2].rgb, base);
        assert_eq!(ladder[2].hex, "#c83c14");
        assert_eq!(ladder[0].rgb, base.mix_linear(&Srgb::WHITE, 2.0 / 3.0));
        assert_eq!(ladder[4].rgb, base.mix_linear(&Srgb::BLACK, 2.0 / 3.0));
    }

    #[test]
    fn ladder_is_ordered_light_to_dark() {
        let base = Srgb::new(40.0, 120.0, 220.0);
        let ladder = tint_shade_ladder(&base, 11);
        let luminance: Vec<_> = ladder
            .iter()
            .map(|s| {
                use crate::models::ToXyz;
                s.rgb.to_xyz().y
            })
            .collect();
        assert!(luminance.windows(2).all(|w| w[0] >= w[1]), "{luminance:?}");
    }

    #[test]
    fn grey_midpoint_uses_linear_light() {
        let ladder = tint_shade_ladder(&Srgb::BLACK, 3);
        // The single tint is a 50% mix with white.
        assert_eq!(ladder[0].rgb, Srgb::new(188.0, 188.0, 188.0));
        assert_eq!(ladder[2].rgb, Srgb::BLACK);
    }
}
