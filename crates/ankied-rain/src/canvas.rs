//! Cell-grid drawing surface for the rain animation.
//!
//! The surface is addressed in abstract pixel units; one glyph cell is
//! `FONT_SIZE` pixels square. Terminals cannot alpha-blend, so instead
//! of painting a translucent black rectangle each frame the canvas keeps
//! a per-cell intensity that `fade` decays; the renderer maps intensity
//! back to color.

/// Glyph size in pixel units. One terminal cell is one glyph.
pub const FONT_SIZE: u32 = 14;

/// A single glyph cell on the canvas.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    /// Last glyph drawn into this cell.
    pub glyph: char,
    /// Remaining brightness, 1.0 when freshly drawn, decayed by `fade`.
    pub intensity: f32,
}

impl Cell {
    const BLANK: Cell = Cell {
        glyph: ' ',
        intensity: 0.0,
    };
}

/// A raster drawing surface with mutable pixel dimensions.
#[derive(Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create a canvas sized to the given pixel box.
    pub fn new(width: u32, height: u32) -> Self {
        let cols = (width / FONT_SIZE) as usize;
        let rows = (height / FONT_SIZE) as usize;
        Self {
            width,
            height,
            cols,
            rows,
            cells: vec![Cell::BLANK; cols * rows],
        }
    }

    /// Surface width in pixel units.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixel units.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of glyph columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of glyph rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Resize the surface to a new pixel box, clearing its contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.cols = (width / FONT_SIZE) as usize;
        self.rows = (height / FONT_SIZE) as usize;
        self.cells = vec![Cell::BLANK; self.cols * self.rows];
    }

    /// Decay every cell's brightness by `alpha`, producing the fading
    /// trail behind each falling glyph.
    pub fn fade(&mut self, alpha: f32) {
        let keep = (1.0 - alpha).clamp(0.0, 1.0);
        for cell in &mut self.cells {
            cell.intensity *= keep;
        }
    }

    /// Stamp a glyph at full brightness at the given pixel position.
    /// Out-of-bounds positions are ignored.
    pub fn draw_glyph(&mut self, glyph: char, x: u32, y: u32) {
        let col = (x / FONT_SIZE) as usize;
        let row = (y / FONT_SIZE) as usize;
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = Cell {
                glyph,
                intensity: 1.0,
            };
        }
    }

    /// Cell at the given grid position, if in bounds.
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }
}
