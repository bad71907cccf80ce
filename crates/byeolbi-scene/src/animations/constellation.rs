//! Hand-plotted constellation chart.
//!
//! The chart is authored in [-1, 1] relative coordinates and projected
//! onto the surface every frame, so a resize re-lays it out on the next
//! frame without any persisted pixel positions.

use byeolbi_core::{ORANGE, Viewport, WHITE, fade};
use rand::Rng;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::Context;

use crate::shapes::{fill_circle, fill_radial, segment};

/// Halo radius as a multiple of the star radius.
const HALO_RADIUS_FACTOR: f64 = 6.0;

/// Concentric bands used to step the halo gradient.
const HALO_BANDS: usize = 6;

/// Per-star per-frame flicker probability is `1 - FLICKER_THRESHOLD`.
const FLICKER_THRESHOLD: f64 = 0.985;

/// Vertical gap between the chart and its title, in dots.
const TITLE_OFFSET: f64 = 35.0;

/// Dot height of one text row.
const LABEL_LINE_STEP: f64 = 4.0;

/// A fixed star of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStar {
    /// Relative x in [-1, 1].
    pub x: f64,
    /// Relative y in [-1, 1], positive downward like screen space.
    pub y: f64,
    /// Display name; empty for unnamed stars. Two-line names embed `\n`.
    pub name: &'static str,
    /// Body radius in dots.
    pub size: f64,
}

/// A static point-and-edge diagram.
#[derive(Debug, Clone, Copy)]
pub struct Constellation {
    pub name: &'static str,
    pub stars: &'static [ChartStar],
    /// Undirected edges as index pairs into `stars`.
    pub edges: &'static [(usize, usize)],
}

/// Cancer, hand-tuned to sit close to the real chart.
///
/// Reference stars: α Cancri (Acubens), β Cancri (Altarf),
/// γ Cancri (Asellus Borealis), δ Cancri (Asellus Australis).
pub const CANCER: Constellation = Constellation {
    name: "Cancer",
    stars: &[
        ChartStar { x: -0.55, y: -0.75, name: "α Cancri\nAcubens", size: 3.6 },
        ChartStar { x: -0.40, y: -0.55, name: "β Cancri\nAltarf", size: 3.2 },
        ChartStar { x: -0.20, y: -0.35, name: "γ Cancri\nAsellus Borealis", size: 3.2 },
        ChartStar { x: 0.00, y: -0.15, name: "", size: 2.5 },
        ChartStar { x: 0.20, y: -0.05, name: "δ Cancri\nAsellus Australis", size: 3.2 },
        ChartStar { x: 0.40, y: -0.15, name: "ε Cancri", size: 2.8 },
        ChartStar { x: 0.55, y: -0.30, name: "ζ Cancri", size: 2.6 },
        ChartStar { x: 0.70, y: -0.45, name: "η Cancri", size: 2.5 },
        // The two claw stars hang loose below the main arc.
        ChartStar { x: -0.25, y: 0.30, name: "", size: 2.2 },
        ChartStar { x: 0.25, y: 0.40, name: "", size: 2.2 },
    ],
    edges: &[
        // Main "C" shaped body.
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 6),
        (6, 7),
        // Claws.
        (2, 8),
        (4, 9),
    ],
};

/// Placement of the chart on the current surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub center: (f64, f64),
    pub scale: f64,
}

impl Layout {
    /// Anchor the chart above center so it clears the message text.
    pub fn for_viewport(vp: &Viewport) -> Self {
        Self {
            center: (vp.width / 2.0, vp.height / 3.0),
            scale: 0.22 * vp.min_side(),
        }
    }
}

/// Project a relative coordinate onto the surface.
///
/// A pure affine map: identical layouts always produce identical pixel
/// positions.
pub fn project(rel: (f64, f64), center: (f64, f64), scale: f64) -> (f64, f64) {
    (center.0 + rel.0 * scale, center.1 + rel.1 * scale)
}

/// Sample which stars flicker this frame.
///
/// Stateless decorative noise: a hit draws one extra opaque highlight
/// that vanishes next frame unless re-rolled.
pub fn sample_flickers(chart: &Constellation, rng: &mut impl Rng) -> Vec<usize> {
    (0..chart.stars.len())
        .filter(|_| rng.gen_range(0.0..1.0) > FLICKER_THRESHOLD)
        .collect()
}

/// Halo opacity at gradient offset `t`: 0.8 at the center, 0.3 at the
/// midpoint, transparent at the rim.
fn halo_alpha(t: f64) -> f64 {
    if t < 0.5 {
        0.8 + (0.3 - 0.8) * (t / 0.5)
    } else {
        0.3 * (1.0 - (t - 0.5) / 0.5)
    }
}

/// Draw the chart: per-star halo, body and label, then the edges, the
/// title, and finally this frame's flicker highlights.
pub fn render(
    ctx: &mut Context,
    vp: &Viewport,
    chart: &Constellation,
    flickers: &[usize],
) {
    let layout = Layout::for_viewport(vp);

    for star in chart.stars {
        let (x, y) = project((star.x, star.y), layout.center, layout.scale);

        fill_radial(ctx, vp, x, y, star.size * HALO_RADIUS_FACTOR, HALO_BANDS, |t| {
            fade(ORANGE, halo_alpha(t))
        });
        fill_circle(ctx, vp, x, y, star.size, fade(WHITE, 0.9));

        if !star.name.is_empty() {
            draw_label(ctx, vp, star, x, y);
        }
    }

    let edge_color = fade(ORANGE, 0.4);
    for &(i, j) in chart.edges {
        let from = project((chart.stars[i].x, chart.stars[i].y), layout.center, layout.scale);
        let to = project((chart.stars[j].x, chart.stars[j].y), layout.center, layout.scale);
        segment(ctx, vp, from, to, edge_color);
    }

    draw_title(ctx, vp, chart.name, &layout);

    for &i in flickers {
        let star = &chart.stars[i];
        let (x, y) = project((star.x, star.y), layout.center, layout.scale);
        fill_circle(ctx, vp, x, y, star.size * 2.0, fade(WHITE, 1.0));
    }
}

/// Label just above-right of the star body, one text row per name line.
fn draw_label(ctx: &mut Context, vp: &Viewport, star: &ChartStar, x: f64, y: f64) {
    let style = Style::new().fg(fade(ORANGE, 0.9));
    let base_x = x + star.size + 3.0;
    let base_y = y - star.size - 3.0;

    for (row, part) in star.name.split('\n').enumerate() {
        let line_y = base_y + row as f64 * LABEL_LINE_STEP;
        ctx.print(
            base_x,
            vp.flip_y(line_y),
            Line::from(Span::styled(part.to_owned(), style)),
        );
    }
}

/// Title centered below the chart.
fn draw_title(ctx: &mut Context, vp: &Viewport, name: &str, layout: &Layout) {
    // One cell is two dots wide, so backing up by the char count
    // centers the title on the chart's axis.
    let x = layout.center.0 - name.chars().count() as f64;
    let y = layout.center.1 + layout.scale + TITLE_OFFSET;
    let style = Style::new().fg(fade(ORANGE, 0.8)).bold();
    ctx.print(x, vp.flip_y(y), Line::from(Span::styled(name.to_owned(), style)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::{SmallRng, mock::StepRng};

    #[test]
    fn test_project_is_affine() {
        assert_eq!(project((0.0, 0.0), (400.0, 200.0), 100.0), (400.0, 200.0));
        assert_eq!(project((1.0, 0.0), (400.0, 200.0), 100.0), (500.0, 200.0));
        assert_eq!(project((-0.5, 0.5), (400.0, 200.0), 100.0), (350.0, 250.0));
    }

    #[test]
    fn test_edge_between_two_projected_stars() {
        // Stars at rel (0,0) and (1,0), scale 100, center (400,200):
        // the connecting edge runs from (400,200) to (500,200).
        let stars = [(0.0, 0.0), (1.0, 0.0)];
        let ends: Vec<_> = stars
            .iter()
            .map(|&rel| project(rel, (400.0, 200.0), 100.0))
            .collect();
        assert_eq!(ends, vec![(400.0, 200.0), (500.0, 200.0)]);
    }

    #[test]
    fn test_layout_anchors_above_center() {
        let layout = Layout::for_viewport(&Viewport::new(800.0, 600.0));
        assert_eq!(layout.center, (400.0, 200.0));
        assert!((layout.scale - 132.0).abs() < 1e-9);
    }

    #[test]
    fn test_layout_is_deterministic_per_size() {
        let vp = Viewport::new(640.0, 480.0);
        assert_eq!(Layout::for_viewport(&vp), Layout::for_viewport(&vp));
    }

    #[test]
    fn test_cancer_chart_is_well_formed() {
        assert_eq!(CANCER.stars.len(), 10);
        assert_eq!(CANCER.edges.len(), 9);
        for &(i, j) in CANCER.edges {
            assert!(i < CANCER.stars.len());
            assert!(j < CANCER.stars.len());
            assert_ne!(i, j);
        }
        for star in CANCER.stars {
            assert!(star.x.abs() <= 1.0 && star.y.abs() <= 1.0);
            assert!(star.size > 0.0);
        }
        // The reference chart names exactly seven of its ten stars.
        assert_eq!(CANCER.stars.iter().filter(|s| !s.name.is_empty()).count(), 7);
    }

    #[test]
    fn test_halo_alpha_matches_gradient_stops() {
        assert!((halo_alpha(0.0) - 0.8).abs() < 1e-12);
        assert!((halo_alpha(0.5) - 0.3).abs() < 1e-12);
        assert!(halo_alpha(1.0).abs() < 1e-12);
    }

    #[test]
    fn test_flicker_extremes() {
        // A generator pinned at ~1.0 trips every star; one pinned at 0.0
        // trips none.
        let mut all = StepRng::new(u64::MAX, 0);
        assert_eq!(
            sample_flickers(&CANCER, &mut all),
            (0..CANCER.stars.len()).collect::<Vec<_>>()
        );
        let mut none = StepRng::new(0, 0);
        assert!(sample_flickers(&CANCER, &mut none).is_empty());
    }

    #[test]
    fn test_flicker_is_rare() {
        let mut rng = SmallRng::seed_from_u64(42);
        let frames = 10_000;
        let hits: usize = (0..frames)
            .map(|_| sample_flickers(&CANCER, &mut rng).len())
            .sum();
        // Expected rate is 1.5% per star per frame.
        let rate = hits as f64 / (frames * CANCER.stars.len()) as f64;
        assert!(rate > 0.005 && rate < 0.03, "flicker rate {rate} off target");
    }
}
