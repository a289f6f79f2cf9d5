//! Digital rain background for the ankied landing app.
//!
//! A continuous falling-glyph animation: one glyph per fixed-width
//! column, a fading trail produced by per-frame decay, and randomized
//! column resets so the rain looks staggered. The animation mounts on
//! a pixel-unit canvas, reacts to surface resizes, and tears down
//! through an explicit cancellable handle.

mod animator;
mod canvas;
mod entropy;
mod glow;
mod rain;
mod render;

pub use animator::Animator;
pub use canvas::{Canvas, Cell, FONT_SIZE};
pub use entropy::{Entropy, RngEntropy, ThreadEntropy};
pub use glow::CursorGlow;
pub use rain::{FADE_ALPHA, RESET_THRESHOLD, Rain};
pub use render::render_cell;
