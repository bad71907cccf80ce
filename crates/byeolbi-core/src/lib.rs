//! Core types shared across the byeolbi crates.
//!
//! Holds the dot-space viewport model and the color utilities used by
//! the scene renderer. Nothing here touches the terminal directly.

mod color;
mod viewport;

pub use color::{ORANGE, WHITE, fade, hsl_to_rgb};
pub use viewport::Viewport;
