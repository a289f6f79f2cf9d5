//! Replaceable random source for the rain animation.
//!
//! The glyph choice and reset timing only need "visually organic
//! variation", so the source is a seam: production uses the thread rng,
//! tests substitute a deterministic stub.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Random draws consumed by one rain frame.
pub trait Entropy {
    /// Uniform pick of the rain glyph, '0' or '1'.
    fn glyph(&mut self) -> char;

    /// Uniform draw in `[0, 1)`, compared against the reset threshold.
    fn draw(&mut self) -> f32;
}

/// Entropy backed by any [`rand::Rng`].
#[derive(Debug)]
pub struct RngEntropy<R: Rng> {
    rng: R,
}

impl<R: Rng> RngEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

/// Entropy backed by the calling thread's rng.
pub type ThreadEntropy = RngEntropy<ThreadRng>;

impl ThreadEntropy {
    /// Entropy backed by the calling thread's rng.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> Entropy for RngEntropy<R> {
    fn glyph(&mut self) -> char {
        if self.rng.random_bool(0.5) { '1' } else { '0' }
    }

    fn draw(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Deterministic stub returning the same draws every frame.
#[cfg(test)]
pub(crate) struct FixedEntropy {
    pub glyph: char,
    pub draw: f32,
}

#[cfg(test)]
impl Entropy for FixedEntropy {
    fn glyph(&mut self) -> char {
        self.glyph
    }

    fn draw(&mut self) -> f32 {
        self.draw
    }
}
