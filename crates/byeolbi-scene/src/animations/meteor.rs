//! Meteor shower: a fixed pool of streaked particles falling toward the
//! lower left, each wholly replaced when it leaves the surface.

use byeolbi_core::{Viewport, WHITE, fade, hsl_to_rgb};
use rand::Rng;
use ratatui::widgets::canvas::Context;

use crate::animations::sample_axis;
use crate::shapes::{fill_circle, gradient_segment};

/// Number of live meteors; the pool never grows or shrinks.
pub const METEOR_COUNT: usize = 20;

/// Sub-segments used to approximate the tail's linear gradient.
const TAIL_STEPS: usize = 12;

/// A single meteor.
#[derive(Debug, Clone, PartialEq)]
pub struct Meteor {
    /// Head position, screen space.
    pub x: f64,
    pub y: f64,
    /// Stroke size in dots; the head glow is `size * 1.5`.
    pub size: f64,
    /// Dots moved per frame, applied to both axes.
    pub speed: f64,
    /// Tail extent along each axis.
    pub tail_length: f64,
    /// HSL hue in [200, 260): the blue range.
    pub hue: f64,
}

impl Meteor {
    /// Factory draw: a fresh meteor at the top of the surface.
    pub fn spawn(surface_width: f64, rng: &mut impl Rng) -> Self {
        Self {
            x: sample_axis(surface_width, rng),
            y: 0.0,
            size: rng.gen_range(1.0..3.0),
            speed: rng.gen_range(2.0..7.0),
            tail_length: rng.gen_range(50.0..150.0),
            hue: rng.gen_range(200.0..260.0),
        }
    }

    /// Head color at full opacity.
    pub fn color(&self) -> (u8, u8, u8) {
        hsl_to_rgb(self.hue, 1.0, 0.7)
    }
}

/// Create the meteor pool.
///
/// Startup only: y is scattered across the surface height so the first
/// frame is not empty at the top. Respawns always restart at y = 0.
pub fn init_pool(vp: &Viewport, count: usize, rng: &mut impl Rng) -> Vec<Meteor> {
    (0..count)
        .map(|_| {
            let mut meteor = Meteor::spawn(vp.width, rng);
            meteor.y = sample_axis(vp.height, rng);
            meteor
        })
        .collect()
}

/// Advance every meteor one frame and respawn the ones that left the
/// surface to the left or below. One check per meteor per frame.
pub fn update(meteors: &mut [Meteor], vp: &Viewport, rng: &mut impl Rng) {
    for meteor in meteors {
        meteor.x -= meteor.speed;
        meteor.y += meteor.speed;
        if meteor.x < 0.0 || meteor.y > vp.height {
            *meteor = Meteor::spawn(vp.width, rng);
        }
    }
}

/// Draw every meteor: gradient tail first, then the white head glow.
pub fn render(ctx: &mut Context, vp: &Viewport, meteors: &[Meteor]) {
    for meteor in meteors {
        let head = (meteor.x, meteor.y);
        let tail = (meteor.x - meteor.tail_length, meteor.y + meteor.tail_length);
        let rgb = meteor.color();
        gradient_segment(ctx, vp, head, tail, TAIL_STEPS, |t| fade(rgb, 1.0 - t));
        fill_circle(ctx, vp, meteor.x, meteor.y, meteor.size * 1.5, fade(WHITE, 1.0));
    }
}
