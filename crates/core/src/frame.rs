//! Fixed-size glyph framebuffer.

use crate::types::{BLANK, FRAME_CELLS, SCREEN_COLS, SCREEN_ROWS};

/// One screen of glyph bytes, row-major.
///
/// The size never changes, so a frame can be kept and refilled every frame
/// without touching the allocator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    cells: [u8; FRAME_CELLS],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            cells: [BLANK; FRAME_CELLS],
        }
    }

    pub fn width(&self) -> usize {
        SCREEN_COLS
    }

    pub fn height(&self) -> usize {
        SCREEN_ROWS
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline(always)]
    fn idx(row: usize, col: usize) -> Option<usize> {
        if row >= SCREEN_ROWS || col >= SCREEN_COLS {
            return None;
        }
        Some(row * SCREEN_COLS + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        Self::idx(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, glyph: u8) {
        if let Some(i) = Self::idx(row, col) {
            self.cells[i] = glyph;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Glyphs of one row, or an empty slice past the bottom.
    pub fn row(&self, row: usize) -> &[u8] {
        if row >= SCREEN_ROWS {
            return &[];
        }
        let start = row * SCREEN_COLS;
        &self.cells[start..start + SCREEN_COLS]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(SCREEN_COLS)
    }

    /// Overwrite cells in row-major order. Cells past the end of `glyphs`
    /// are left untouched; extra glyphs are ignored.
    pub fn fill_from<I: IntoIterator<Item = u8>>(&mut self, glyphs: I) {
        for (cell, glyph) in self.cells.iter_mut().zip(glyphs) {
            *cell = glyph;
        }
    }

    /// Number of cells that are not blank.
    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != BLANK).count()
    }
}
