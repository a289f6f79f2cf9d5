//! Digital rain column state and per-frame update.

use crate::canvas::{Canvas, FONT_SIZE};
use crate::entropy::Entropy;

/// Per-frame trail decay, the translucent black wash over the surface.
pub const FADE_ALPHA: f32 = 0.05;

/// A column past the bottom resets only when a uniform draw exceeds
/// this, so glyphs return to the top at staggered moments (~2.5% of
/// eligible frames).
pub const RESET_THRESHOLD: f32 = 0.975;

/// Fall positions for every glyph column, in glyph-size units.
#[derive(Debug)]
pub struct Rain {
    drops: Vec<u32>,
}

impl Rain {
    /// Allocate one column per `FONT_SIZE` pixels of surface width,
    /// every fall position starting at 1. A zero-width surface yields
    /// zero columns and a no-op animation.
    pub fn new(canvas: &Canvas) -> Self {
        let columns = (canvas.width() / FONT_SIZE) as usize;
        Self {
            drops: vec![1; columns],
        }
    }

    /// Number of glyph columns.
    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Current fall positions.
    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Advance the animation by one frame.
    pub fn step(&mut self, canvas: &mut Canvas, alpha: f32, entropy: &mut impl Entropy) {
        canvas.fade(alpha);
        let height = canvas.height();

        for (i, drop) in self.drops.iter_mut().enumerate() {
            canvas.draw_glyph(entropy.glyph(), i as u32 * FONT_SIZE, *drop * FONT_SIZE);

            if *drop * FONT_SIZE > height && entropy.draw() > RESET_THRESHOLD {
                *drop = 0;
            }
            *drop += 1;
        }
    }

    /// Recompute the column array for the canvas's current width.
    ///
    /// The column count tracks the surface rather than staying frozen
    /// at its mount-time value; terminals resize often and stale
    /// columns would leave part of the surface dry. Fall positions
    /// restart at 1.
    pub fn resize(&mut self, canvas: &Canvas) {
        let columns = (canvas.width() / FONT_SIZE) as usize;
        self.drops = vec![1; columns];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{FixedEntropy, RngEntropy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn never_reset() -> FixedEntropy {
        FixedEntropy {
            glyph: '1',
            draw: 0.5,
        }
    }

    #[test]
    fn test_column_count_matches_width() {
        let canvas = Canvas::new(140, 70);
        let rain = Rain::new(&canvas);
        assert_eq!(rain.columns(), 10);
        assert_eq!(rain.drops().len(), 10);
    }

    #[test]
    fn test_initial_positions_are_one() {
        let canvas = Canvas::new(280, 140);
        let rain = Rain::new(&canvas);
        assert!(rain.drops().iter().all(|&d| d == 1));
    }

    #[test]
    fn test_monotonic_advance_without_reset() {
        let mut canvas = Canvas::new(140, 700);
        let mut rain = Rain::new(&canvas);
        let mut entropy = never_reset();

        let before: Vec<u32> = rain.drops().to_vec();
        rain.step(&mut canvas, FADE_ALPHA, &mut entropy);
        for (prev, next) in before.iter().zip(rain.drops()) {
            assert_eq!(*next, prev + 1);
        }
    }

    #[test]
    fn test_no_reset_while_within_surface() {
        // Tall surface: positions never exceed the height, so even a
        // draw past the threshold must not reset anything.
        let mut canvas = Canvas::new(140, 14_000);
        let mut rain = Rain::new(&canvas);
        let mut entropy = FixedEntropy {
            glyph: '0',
            draw: 0.99,
        };

        for frame in 0..50 {
            rain.step(&mut canvas, FADE_ALPHA, &mut entropy);
            assert!(rain.drops().iter().all(|&d| d == frame + 2));
        }
    }

    #[test]
    fn test_reset_only_past_bottom() {
        // One column, one-row surface: position 1 (14px) is not past a
        // 14px height, position 2 is.
        let mut canvas = Canvas::new(14, 14);
        let mut rain = Rain::new(&canvas);
        let mut entropy = FixedEntropy {
            glyph: '0',
            draw: 0.99,
        };

        rain.step(&mut canvas, FADE_ALPHA, &mut entropy);
        assert_eq!(rain.drops(), &[2]);

        // Now 2 * 14 > 14 and the draw clears the threshold: reset to 0
        // then increment.
        rain.step(&mut canvas, FADE_ALPHA, &mut entropy);
        assert_eq!(rain.drops(), &[1]);
    }

    #[test]
    fn test_reset_rate_converges() {
        let mut canvas = Canvas::new(14, 14);
        let mut rain = Rain::new(&canvas);
        let mut entropy = RngEntropy::new(StdRng::seed_from_u64(42));

        let mut eligible = 0u64;
        let mut resets = 0u64;
        for _ in 0..200_000 {
            let before = rain.drops()[0];
            rain.step(&mut canvas, FADE_ALPHA, &mut entropy);
            if before * FONT_SIZE > canvas.height() {
                eligible += 1;
                if rain.drops()[0] < before {
                    resets += 1;
                }
            }
        }

        assert!(eligible > 10_000);
        let rate = resets as f64 / eligible as f64;
        assert!((rate - 0.025).abs() < 0.005, "reset rate {rate}");
    }

    #[test]
    fn test_resize_recomputes_columns() {
        let mut canvas = Canvas::new(140, 70);
        let mut rain = Rain::new(&canvas);
        assert_eq!(rain.columns(), 10);

        canvas.resize(280, 70);
        rain.resize(&canvas);
        assert_eq!(rain.columns(), 20);
        assert!(rain.drops().iter().all(|&d| d == 1));
    }

    #[test]
    fn test_single_frame_scenario() {
        // Width 140, glyph size 14: exactly 10 columns at position 1.
        // After one frame every position becomes 2 and no resets occur,
        // since position 1 * 14 is within the 700px surface.
        let mut canvas = Canvas::new(140, 700);
        let mut rain = Rain::new(&canvas);
        assert_eq!(rain.columns(), 10);
        assert!(rain.drops().iter().all(|&d| d == 1));

        let mut entropy = FixedEntropy {
            glyph: '1',
            draw: 0.99,
        };
        rain.step(&mut canvas, FADE_ALPHA, &mut entropy);

        assert!(rain.drops().iter().all(|&d| d == 2));
        for col in 0..10 {
            // Glyphs were stamped at row 1 (y = 1 * 14).
            let cell = canvas.cell(col, 1).copied();
            assert!(cell.is_some_and(|c| c.glyph == '1' && c.intensity == 1.0));
        }
    }

    #[test]
    fn test_zero_size_surface_no_ops() {
        let mut canvas = Canvas::new(0, 0);
        let mut rain = Rain::new(&canvas);
        assert_eq!(rain.columns(), 0);
        rain.step(&mut canvas, FADE_ALPHA, &mut never_reset());
        assert_eq!(rain.columns(), 0);
    }
}
