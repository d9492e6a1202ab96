//! GridView: lays a [`Grid`] out in a terminal framebuffer.
//!
//! This module is pure (no I/O). Each grid cell becomes its two-character
//! glyph, and every grid row is drawn twice so cells look roughly square.
//! The board sits inside a `|`/`-` box.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{cell_glyph, PieceKind, GRID_COLS, GRID_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Center,
    TopLeft,
}

/// Grid-to-framebuffer layout
#[derive(Debug, Clone, Copy)]
pub struct GridView {
    /// Terminal rows drawn per grid row.
    row_repeat: u16,
    placement: Placement,
}

/// Terminal columns per grid cell (glyphs are two characters)
const CELL_W: u16 = 2;

impl Default for GridView {
    fn default() -> Self {
        Self {
            row_repeat: 2,
            placement: Placement::Center,
        }
    }
}

impl GridView {
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Outer size of the boxed board in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        let w = GRID_COLS as u16 * CELL_W + 2;
        let h = GRID_ROWS as u16 * self.row_repeat + 2;
        (w, h)
    }

    /// Render the grid into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, grid: &Grid, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = self.frame_size();
        let (x0, y0) = match self.placement {
            Placement::Center => (
                viewport.width.saturating_sub(frame_w) / 2,
                viewport.height.saturating_sub(frame_h) / 2,
            ),
            Placement::TopLeft => (0, 0),
        };

        draw_box(fb, x0, y0, frame_w, frame_h);

        for (row, cells) in grid.iter_rows().enumerate() {
            for repeat in 0..self.row_repeat {
                let y = y0 + 1 + row as u16 * self.row_repeat + repeat;
                for (col, &cell) in cells.iter().enumerate() {
                    let x = x0 + 1 + col as u16 * CELL_W;
                    let style = cell.map(piece_style).unwrap_or_default();
                    fb.put_str(x, y, cell_glyph(cell), style);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, viewport, &mut fb);
        fb
    }
}

fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::fg(Rgb::new(200, 200, 200));

    for corner in [(x, y), (x + w - 1, y), (x, y + h - 1), (x + w - 1, y + h - 1)] {
        fb.put_char(corner.0, corner.1, '+', style);
    }
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '-', style);
        fb.put_char(x + dx, y + h - 1, '-', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '|', style);
        fb.put_char(x + w - 1, y + dy, '|', style);
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle {
        bold: true,
        ..CellStyle::fg(fg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_22_by_42() {
        assert_eq!(GridView::default().frame_size(), (22, 42));
    }

    #[test]
    fn small_viewport_clips_without_panicking() {
        let mut grid = Grid::new();
        grid.set(19, 9, Some(PieceKind::T));
        let fb = GridView::default().render(&grid, Viewport::new(8, 5));
        assert_eq!(fb.width(), 8);
        assert_eq!(fb.height(), 5);
    }
}
