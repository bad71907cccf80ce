//! Dot-space viewport derived from the terminal area.

use ratatui::layout::Rect;

/// Horizontal Braille dots per terminal cell.
pub const DOTS_PER_COL: f64 = 2.0;
/// Vertical Braille dots per terminal cell.
pub const DOTS_PER_ROW: f64 = 4.0;

/// The drawing surface in dot space.
///
/// The scene model uses screen coordinates (y grows downward, like the
/// original canvas); the canvas widget's y grows upward, so [`Viewport::flip_y`]
/// is applied once at plot time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface width in dots.
    pub width: f64,
    /// Surface height in dots.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport with an explicit dot-space size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Derive the viewport from the current frame area.
    ///
    /// Each terminal cell is a 2x4 Braille dot block, so the surface is
    /// re-fit to the terminal on every frame; a resize takes effect on
    /// the next frame with no stale geometry.
    pub fn from_area(area: Rect) -> Self {
        Self {
            width: area.width as f64 * DOTS_PER_COL,
            height: area.height as f64 * DOTS_PER_ROW,
        }
    }

    /// Shorter side of the surface, used for size-relative scaling.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Convert a screen-space y (downward) to canvas y (upward).
    pub fn flip_y(&self, y: f64) -> f64 {
        self.height - y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_area_uses_dot_resolution() {
        let vp = Viewport::from_area(Rect::new(0, 0, 80, 24));
        assert_eq!(vp.width, 160.0);
        assert_eq!(vp.height, 96.0);
    }

    #[test]
    fn test_flip_y_mirrors_around_height() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.flip_y(0.0), 600.0);
        assert_eq!(vp.flip_y(600.0), 0.0);
        assert_eq!(vp.min_side(), 600.0);
    }
}
