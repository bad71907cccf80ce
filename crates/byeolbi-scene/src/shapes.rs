//! Canvas drawing helpers shared by the scene animations.
//!
//! The canvas only plots uniformly colored points and line segments, so
//! filled circles are point discs and gradients are stepped: a radial
//! gradient becomes concentric bands, a linear gradient becomes a run
//! of segments with a per-segment fade.

use byeolbi_core::Viewport;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Context, Line as CanvasLine, Points};

/// Enumerate the dot-grid points inside a circle (screen space).
pub fn disc_points(cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    if radius < 0.5 {
        return vec![(cx, cy)];
    }

    let mut coords = Vec::new();
    let min_x = (cx - radius).floor() as i64;
    let max_x = (cx + radius).ceil() as i64;
    let min_y = (cy - radius).floor() as i64;
    let max_y = (cy + radius).ceil() as i64;

    for gy in min_y..=max_y {
        for gx in min_x..=max_x {
            let dx = gx as f64 - cx;
            let dy = gy as f64 - cy;
            if dx * dx + dy * dy <= radius * radius {
                coords.push((gx as f64, gy as f64));
            }
        }
    }
    coords
}

/// Draw a filled circle at a screen-space position.
pub fn fill_circle(ctx: &mut Context, vp: &Viewport, cx: f64, cy: f64, radius: f64, color: Color) {
    let coords: Vec<(f64, f64)> = disc_points(cx, cy, radius)
        .into_iter()
        .map(|(x, y)| (x, vp.flip_y(y)))
        .collect();
    ctx.draw(&Points {
        coords: &coords,
        color,
    });
}

/// Draw a radial-gradient disc at a screen-space position.
///
/// Points are grouped into `bands` rings by normalized distance from
/// the center and each ring gets the color for its band midpoint, so
/// `color_at` is sampled on 0..1 like canvas gradient offsets.
pub fn fill_radial(
    ctx: &mut Context,
    vp: &Viewport,
    cx: f64,
    cy: f64,
    radius: f64,
    bands: usize,
    color_at: impl Fn(f64) -> Color,
) {
    let bands = bands.max(1);
    let mut rings: Vec<Vec<(f64, f64)>> = vec![Vec::new(); bands];

    for (x, y) in disc_points(cx, cy, radius) {
        let dx = x - cx;
        let dy = y - cy;
        let t = (dx * dx + dy * dy).sqrt() / radius.max(f64::EPSILON);
        let band = ((t * bands as f64) as usize).min(bands - 1);
        rings[band].push((x, vp.flip_y(y)));
    }

    for (band, coords) in rings.iter().enumerate() {
        if coords.is_empty() {
            continue;
        }
        let t = (band as f64 + 0.5) / bands as f64;
        ctx.draw(&Points {
            coords,
            color: color_at(t),
        });
    }
}

/// Draw a screen-space segment as a stepped linear gradient.
///
/// `color_at` is sampled at each sub-segment midpoint, 0 at `(x1, y1)`
/// and 1 at `(x2, y2)`.
pub fn gradient_segment(
    ctx: &mut Context,
    vp: &Viewport,
    (x1, y1): (f64, f64),
    (x2, y2): (f64, f64),
    steps: usize,
    color_at: impl Fn(f64) -> Color,
) {
    let steps = steps.max(1);
    for i in 0..steps {
        let t0 = i as f64 / steps as f64;
        let t1 = (i + 1) as f64 / steps as f64;
        let mid = (t0 + t1) / 2.0;
        ctx.draw(&CanvasLine::new(
            x1 + (x2 - x1) * t0,
            vp.flip_y(y1 + (y2 - y1) * t0),
            x1 + (x2 - x1) * t1,
            vp.flip_y(y1 + (y2 - y1) * t1),
            color_at(mid),
        ));
    }
}

/// Draw a plain screen-space segment.
pub fn segment(
    ctx: &mut Context,
    vp: &Viewport,
    (x1, y1): (f64, f64),
    (x2, y2): (f64, f64),
    color: Color,
) {
    ctx.draw(&CanvasLine::new(
        x1,
        vp.flip_y(y1),
        x2,
        vp.flip_y(y2),
        color,
    ));
}
