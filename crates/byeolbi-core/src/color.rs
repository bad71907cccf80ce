//! Color utility functions for the scene renderer.

use ratatui::style::Color;

/// The warm orange used for constellation halos, edges and labels.
pub const ORANGE: (u8, u8, u8) = (255, 165, 100);

/// Plain white, for star bodies and meteor heads.
pub const WHITE: (u8, u8, u8) = (255, 255, 255);

/// Composite a translucent color over the black background.
///
/// The terminal has no alpha channel; alpha `a` over black is just the
/// RGB components scaled by `a`.
pub fn fade(rgb: (u8, u8, u8), alpha: f64) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    Color::Rgb(
        (rgb.0 as f64 * a) as u8,
        (rgb.1 as f64 * a) as u8,
        (rgb.2 as f64 * a) as u8,
    )
}

/// Convert HSL (h in degrees, s and l in 0..=1) to RGB components.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_scales_toward_black() {
        assert_eq!(fade(WHITE, 1.0), Color::Rgb(255, 255, 255));
        assert_eq!(fade(WHITE, 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(fade((200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_hsl_grayscale_when_unsaturated() {
        assert_eq!(hsl_to_rgb(120.0, 0.0, 0.5), (127, 127, 127));
    }

    #[test]
    fn test_hsl_meteor_range_is_blue_leaning() {
        // Hues in [200, 260) at full saturation, 70% lightness sit in
        // the cyan-to-violet band: blue dominates red and green.
        for hue in [200.0, 230.0, 259.0] {
            let (r, g, b) = hsl_to_rgb(hue, 1.0, 0.7);
            assert!(b > r, "hue {hue}: blue {b} not above red {r}");
            assert!(b >= g, "hue {hue}: blue {b} below green {g}");
        }
    }
}
