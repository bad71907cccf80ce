//! The individual scene animations.

use rand::Rng;

pub mod constellation;
pub mod meteor;
pub mod starfield;

/// Uniform draw over [0, limit), or 0 when the axis has collapsed.
///
/// A zero-column or zero-row terminal yields an empty sampling range;
/// the original canvas positions such draws at 0 and keeps running.
pub(crate) fn sample_axis(limit: f64, rng: &mut impl Rng) -> f64 {
    if limit > 0.0 {
        rng.gen_range(0.0..limit)
    } else {
        0.0
    }
}
