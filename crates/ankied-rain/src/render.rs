//! Mapping canvas cells to styled terminal spans.

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::canvas::Canvas;
use crate::glow::CursorGlow;

/// Cells dimmer than this render as blank, completing the fade-out.
const MIN_VISIBLE: f32 = 0.04;

/// Render one background cell: rain glyph on a green ramp in the
/// foreground, pointer glow in the background.
pub fn render_cell(canvas: &Canvas, glow: &CursorGlow, column: u16, row: u16) -> Span<'static> {
    let mut style = Style::new();
    if let Some(bg) = glow.color_at(column, row) {
        style = style.bg(bg);
    }

    let cell = canvas.cell(column as usize, row as usize);
    match cell {
        Some(cell) if cell.intensity >= MIN_VISIBLE => {
            // Fresh glyphs get a bright white-green head, trails fade
            // through darker greens.
            let fg = if cell.intensity > 0.95 {
                Color::Rgb(200, 255, 200)
            } else {
                let g = (60.0 + 180.0 * cell.intensity) as u8;
                Color::Rgb(0, g, 0)
            };
            Span::styled(cell.glyph.to_string(), style.fg(fg))
        }
        _ => Span::styled(" ".to_string(), style),
    }
}
