//! Twinkling background star field.

use byeolbi_core::{Viewport, WHITE, fade};
use rand::Rng;
use ratatui::widgets::canvas::Context;

use crate::animations::sample_axis;
use crate::shapes::fill_circle;

/// Number of background stars.
pub const STAR_COUNT: usize = 200;

/// A single background star.
///
/// Stars are created once at startup and mutated in place forever;
/// there is no respawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Radius in dots.
    pub size: f64,
    /// Per-frame brightness increment; its sign flips at the [0, 1] bounds.
    pub blink_speed: f64,
    /// Oscillates over [0, 1] with up to one increment of overshoot.
    pub brightness: f64,
}

impl Star {
    /// Advance the twinkle by one frame.
    ///
    /// Brightness is not clamped: it may leave [0, 1] by one increment
    /// before the flipped sign brings it back. Preserved as observed in
    /// the original.
    pub fn advance(&mut self) {
        self.brightness += self.blink_speed;
        if self.brightness > 1.0 || self.brightness < 0.0 {
            self.blink_speed = -self.blink_speed;
        }
    }

    /// Display opacity: twinkles between half and full.
    pub fn alpha(&self) -> f64 {
        0.5 + self.brightness * 0.5
    }
}

/// Create the star field for the given surface.
pub fn init_stars(vp: &Viewport, count: usize, rng: &mut impl Rng) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: sample_axis(vp.width, rng),
            y: sample_axis(vp.height, rng),
            size: rng.gen_range(0.0..2.0),
            blink_speed: rng.gen_range(0.0..0.05),
            brightness: rng.gen_range(0.0..1.0),
        })
        .collect()
}

/// Advance every star by one frame.
pub fn advance(stars: &mut [Star]) {
    for star in stars {
        star.advance();
    }
}

/// Draw the star field.
pub fn render(ctx: &mut Context, vp: &Viewport, stars: &[Star]) {
    for star in stars {
        fill_circle(ctx, vp, star.x, star.y, star.size, fade(WHITE, star.alpha()));
    }
}
