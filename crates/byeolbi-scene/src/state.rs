//! Scene state ownership and per-frame orchestration.

use byeolbi_core::Viewport;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::Canvas;

use crate::animations::constellation::{self, CANCER, Constellation};
use crate::animations::meteor::{self, METEOR_COUNT, Meteor};
use crate::animations::starfield::{self, STAR_COUNT, Star};

/// Owner of the whole animated scene.
///
/// Stars and meteors are initialized lazily on the first frame, once
/// the real surface size is known. They are *not* reinitialized on
/// resize: stars keep their positions for the program's life and
/// meteors migrate to the new bounds through their normal respawn.
#[derive(Debug)]
pub struct SceneState {
    stars: Vec<Star>,
    meteors: Vec<Meteor>,
    chart: Constellation,
    rng: SmallRng,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    /// Create the scene with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Create the scene with an injected random source, for exact
    /// respawn and flicker assertions.
    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            stars: Vec::new(),
            meteors: Vec::new(),
            chart: CANCER,
            rng,
        }
    }

    /// Render one frame and advance the scene.
    ///
    /// Draw order is fixed: star field, constellation chart, meteors.
    /// Meteor movement is applied after drawing, as the original does.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let vp = Viewport::from_area(area);

        if self.stars.is_empty() {
            self.stars = starfield::init_stars(&vp, STAR_COUNT, &mut self.rng);
            self.meteors = meteor::init_pool(&vp, METEOR_COUNT, &mut self.rng);
        }

        // State mutation happens outside the paint closure: twinkle
        // advance and this frame's flicker roll, then a read-only paint.
        starfield::advance(&mut self.stars);
        let flickers = constellation::sample_flickers(&self.chart, &mut self.rng);

        let canvas = Canvas::default()
            .background_color(Color::Black)
            .marker(Marker::Braille)
            .x_bounds([0.0, vp.width])
            .y_bounds([0.0, vp.height])
            .paint(|ctx| {
                starfield::render(ctx, &vp, &self.stars);
                ctx.layer();
                constellation::render(ctx, &vp, &self.chart, &flickers);
                ctx.layer();
                meteor::render(ctx, &vp, &self.meteors);
            });
        frame.render_widget(canvas, area);

        meteor::update(&mut self.meteors, &vp, &mut self.rng);
    }

    /// Live meteors, for inspection.
    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    /// Background stars, for inspection.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_frames(scene: &mut SceneState, frames: usize) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        for _ in 0..frames {
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    scene.render(frame, area);
                })
                .expect("draw");
        }
    }

    #[test]
    fn test_first_frame_populates_the_scene() {
        let mut scene = SceneState::with_rng(SmallRng::seed_from_u64(2));
        assert!(scene.stars().is_empty());
        draw_frames(&mut scene, 1);
        assert_eq!(scene.stars().len(), STAR_COUNT);
        assert_eq!(scene.meteors().len(), METEOR_COUNT);
    }

    #[test]
    fn test_pool_size_holds_across_frames() {
        let mut scene = SceneState::with_rng(SmallRng::seed_from_u64(8));
        draw_frames(&mut scene, 500);
        assert_eq!(scene.meteors().len(), METEOR_COUNT);
        assert_eq!(scene.stars().len(), STAR_COUNT);
    }

    #[test]
    fn test_stars_survive_a_resize() {
        let mut scene = SceneState::with_rng(SmallRng::seed_from_u64(4));
        draw_frames(&mut scene, 1);
        let before: Vec<(f64, f64)> = scene.stars().iter().map(|s| (s.x, s.y)).collect();

        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| {
                let area = frame.area();
                scene.render(frame, area);
            })
            .expect("draw");

        let after: Vec<(f64, f64)> = scene.stars().iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(before, after);
    }
}
