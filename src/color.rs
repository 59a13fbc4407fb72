//! Body color and the collision color-blend rule.
//!
//! Colors are stored as 8-bit sRGB channels, the same resolution a canvas
//! color picker hands us. Blending is purely cosmetic and never feeds back
//! into physics.

use bevy::prelude::Color;
use rand::Rng;
use serde::Deserialize;

use crate::constants::{COLOR_BLEND_THRESHOLD, COLOR_JITTER, DEFAULT_COLOR};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        let [r, g, b] = DEFAULT_COLOR;
        Self { r, g, b }
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A uniformly random color.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// Euclidean distance between two colors in RGB space.
    pub fn distance(self, other: Rgb) -> f32 {
        let dr = f32::from(self.r) - f32::from(other.r);
        let dg = f32::from(self.g) - f32::from(other.g);
        let db = f32::from(self.b) - f32::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Channel-wise midpoint, rounded down.
    pub fn midpoint(self, other: Rgb) -> Rgb {
        let mid = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
        Rgb::new(
            mid(self.r, other.r),
            mid(self.g, other.g),
            mid(self.b, other.b),
        )
    }

    /// Color two colliding bodies both take on.
    ///
    /// Similar colors (distance below [`COLOR_BLEND_THRESHOLD`]) converge to
    /// the exact midpoint. Dissimilar colors land near the midpoint with up to
    /// ±[`COLOR_JITTER`] per channel, so a pit of mixed colors keeps some
    /// variety instead of collapsing to grey.
    pub fn blend(self, other: Rgb, rng: &mut impl Rng) -> Rgb {
        let mid = self.midpoint(other);
        if self.distance(other) < COLOR_BLEND_THRESHOLD {
            return mid;
        }
        let mut jitter = |c: u8| {
            let shifted = i16::from(c) + rng.gen_range(-COLOR_JITTER..=COLOR_JITTER);
            shifted.clamp(0, 255) as u8
        };
        Rgb::new(jitter(mid.r), jitter(mid.g), jitter(mid.b))
    }

    /// Convert to a Bevy color with the given opacity.
    pub fn to_color(self, alpha: f32) -> Color {
        Color::srgba_u8(self.r, self.g, self.b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_is_canvas_red() {
        assert_eq!(Rgb::default(), Rgb::new(0xff, 0x52, 0x52));
    }

    #[test]
    fn similar_colors_blend_to_exact_midpoint() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Rgb::new(100, 100, 100);
        let b = Rgb::new(110, 120, 104);
        assert!(a.distance(b) < COLOR_BLEND_THRESHOLD);
        assert_eq!(a.blend(b, &mut rng), Rgb::new(105, 110, 102));
    }

    #[test]
    fn dissimilar_colors_stay_within_jitter_of_midpoint() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::new(0, 0, 255);
        let mid = a.midpoint(b);
        for _ in 0..200 {
            let c = a.blend(b, &mut rng);
            for (got, want) in [(c.r, mid.r), (c.g, mid.g), (c.b, mid.b)] {
                let delta = (i16::from(got) - i16::from(want)).abs();
                assert!(delta <= COLOR_JITTER, "channel {got} strayed from {want}");
            }
        }
    }

    #[test]
    fn jitter_clamps_at_channel_limits() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(0, 255, 0);
        for _ in 0..100 {
            let c = a.blend(b, &mut rng);
            // Red and blue midpoints are 0; jitter must not wrap around.
            assert!(c.r <= COLOR_JITTER as u8);
            assert!(c.b <= COLOR_JITTER as u8);
        }
    }

    #[test]
    fn blend_is_deterministic_for_a_seed() {
        let a = Rgb::new(10, 200, 30);
        let b = Rgb::new(220, 40, 90);
        let first = a.blend(b, &mut StdRng::seed_from_u64(99));
        let second = a.blend(b, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
