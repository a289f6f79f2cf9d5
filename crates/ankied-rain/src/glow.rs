//! Pointer-following background glow.
//!
//! A soft radial patch of the brand gradient (teal to indigo) centered
//! on the last observed pointer cell, blended into the background layer
//! beneath the page content.

use ratatui::style::Color;

/// Gradient endpoint at the glow center.
const INNER: (f32, f32, f32) = (0x43 as f32, 0xd9 as f32, 0xad as f32);
/// Gradient endpoint at the glow edge.
const OUTER: (f32, f32, f32) = (0x4d as f32, 0x5b as f32, 0xce as f32);

/// How much of the gradient survives into the background; the blob
/// should read as a blurred wash, not a solid disc.
const STRENGTH: f32 = 0.35;

/// Glow state tracking the last pointer position.
#[derive(Debug)]
pub struct CursorGlow {
    pos: Option<(u16, u16)>,
    radius: f32,
}

impl Default for CursorGlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorGlow {
    pub fn new() -> Self {
        Self {
            pos: None,
            radius: 14.0,
        }
    }

    /// Record a pointer position in cell coordinates.
    pub fn observe(&mut self, column: u16, row: u16) {
        self.pos = Some((column, row));
    }

    /// Background color contribution at a cell, or `None` outside the
    /// glow (or before any pointer event arrived).
    pub fn color_at(&self, column: u16, row: u16) -> Option<Color> {
        let (cx, cy) = self.pos?;
        let dx = column as f32 - cx as f32;
        // Terminal cells are roughly twice as tall as wide.
        let dy = (row as f32 - cy as f32) * 2.0;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance >= self.radius {
            return None;
        }

        let t = distance / self.radius;
        let falloff = (1.0 - t) * STRENGTH;
        let r = (INNER.0 + (OUTER.0 - INNER.0) * t) * falloff;
        let g = (INNER.1 + (OUTER.1 - INNER.1) * t) * falloff;
        let b = (INNER.2 + (OUTER.2 - INNER.2) * t) * falloff;
        Some(Color::Rgb(r as u8, g as u8, b as u8))
    }
}
