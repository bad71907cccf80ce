//! Night-sky scene rendering for the byeolbi greeting card.
//!
//! This crate owns the animated scene: a twinkling star field, a meteor
//! shower with respawning particles, and a hand-plotted constellation
//! chart, all drawn on a Braille canvas. [`SceneState`] holds the
//! particle state and the random source; the per-frame entry point is
//! [`SceneState::render`].

mod animations;
mod shapes;
mod state;

pub use animations::meteor::Meteor;
pub use animations::starfield::Star;
pub use state::SceneState;
