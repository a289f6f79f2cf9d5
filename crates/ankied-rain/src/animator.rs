//! Lifecycle wrapper around the rain state.
//!
//! Owns the canvas and column array, counts frames, and carries the
//! teardown flag: once `stop` has been called no further frame runs and
//! late resize notifications are dropped.

use crate::canvas::Canvas;
use crate::entropy::Entropy;
use crate::rain::{FADE_ALPHA, Rain};

/// A mounted rain animation.
#[derive(Debug)]
pub struct Animator {
    canvas: Canvas,
    rain: Rain,
    fade_alpha: f32,
    frames: u64,
    running: bool,
}

impl Animator {
    /// Mount the animation on a surface of the given pixel box.
    pub fn new(width: u32, height: u32) -> Self {
        let canvas = Canvas::new(width, height);
        let rain = Rain::new(&canvas);
        Self {
            canvas,
            rain,
            fade_alpha: FADE_ALPHA,
            frames: 0,
            running: true,
        }
    }

    /// Override the per-frame trail decay.
    pub fn set_fade_alpha(&mut self, alpha: f32) {
        self.fade_alpha = alpha.clamp(0.0, 1.0);
    }

    /// Advance by exactly one frame. Does nothing after `stop`.
    pub fn on_tick(&mut self, entropy: &mut impl Entropy) {
        if !self.running {
            return;
        }
        self.rain.step(&mut self.canvas, self.fade_alpha, entropy);
        self.frames += 1;
    }

    /// Track the container's new pixel box. Notifications arriving
    /// after `stop` are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.running {
            return;
        }
        if width == self.canvas.width() && height == self.canvas.height() {
            return;
        }
        self.canvas.resize(width, height);
        self.rain.resize(&self.canvas);
    }

    /// Tear down: no frame runs past this point.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames executed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn rain(&self) -> &Rain {
        &self.rain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::FixedEntropy;

    fn entropy() -> FixedEntropy {
        FixedEntropy {
            glyph: '0',
            draw: 0.5,
        }
    }

    #[test]
    fn test_ticks_count_frames() {
        let mut animator = Animator::new(140, 700);
        let mut entropy = entropy();
        for _ in 0..5 {
            animator.on_tick(&mut entropy);
        }
        assert_eq!(animator.frames(), 5);
    }

    #[test]
    fn test_stop_halts_frames() {
        let mut animator = Animator::new(140, 700);
        let mut entropy = entropy();
        animator.on_tick(&mut entropy);
        animator.on_tick(&mut entropy);
        animator.stop();

        let at_stop = animator.frames();
        for _ in 0..10 {
            animator.on_tick(&mut entropy);
        }
        assert_eq!(animator.frames(), at_stop);
        assert!(!animator.is_running());
    }

    #[test]
    fn test_resize_after_stop_is_ignored() {
        let mut animator = Animator::new(140, 700);
        animator.stop();
        animator.resize(280, 700);
        assert_eq!(animator.canvas().width(), 140);
        assert_eq!(animator.rain().columns(), 10);
    }

    #[test]
    fn test_resize_updates_surface() {
        let mut animator = Animator::new(140, 700);
        animator.resize(280, 350);
        assert_eq!(animator.canvas().width(), 280);
        assert_eq!(animator.canvas().height(), 350);
        assert_eq!(animator.rain().columns(), 20);
    }

    #[test]
    fn test_zero_size_mount_is_graceful() {
        let mut animator = Animator::new(0, 0);
        let mut entropy = entropy();
        animator.on_tick(&mut entropy);
        assert_eq!(animator.frames(), 1);
        assert_eq!(animator.rain().columns(), 0);
    }
}
