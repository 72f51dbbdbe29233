//! Framebuffer of character cells for the monochrome path.

use std::ops::Range;

use crate::types::Rgb;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// `None` keeps the terminal's default background
    pub background: Option<Rgb>,
}

impl Cell {
    pub const fn plain(ch: char) -> Self {
        Self {
            ch,
            background: None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::plain(' ')
    }
}

/// 2D framebuffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fill a whole row.
    pub fn fill_row(&mut self, y: u16, cell: Cell) {
        if y >= self.height {
            return;
        }
        let start = (y as usize) * (self.width as usize);
        self.cells[start..start + self.width as usize].fill(cell);
    }

    /// Fill rows `rows` of column `x`; out-of-range rows are skipped.
    pub fn fill_column(&mut self, x: u16, rows: Range<u16>, cell: Cell) {
        for y in rows {
            self.set(x, y, cell);
        }
    }

    /// Overwrite the last column of every row with `'\n'`.
    pub fn terminate_rows(&mut self) {
        if self.width == 0 {
            return;
        }
        let last = self.width - 1;
        for y in 0..self.height {
            self.set(last, y, Cell::plain('\n'));
        }
    }

    /// Row-major text of the buffer (background colors dropped).
    pub fn to_text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }

    /// Text of one row.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_are_bounds_checked() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(2, 1, Cell::plain('x'));
        fb.set(3, 0, Cell::plain('y'));
        assert_eq!(fb.get(2, 1), Some(Cell::plain('x')));
        assert_eq!(fb.get(3, 0), None);
        assert_eq!(fb.to_text(), "     x");
    }

    #[test]
    fn row_and_column_fills() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_row(1, Cell::plain('-'));
        fb.fill_column(2, 0..6, Cell::plain('|'));
        assert_eq!(fb.row_text(0), "  | ");
        assert_eq!(fb.row_text(1), "--|-");
        assert_eq!(fb.row_text(3), "  | ");
    }

    #[test]
    fn terminate_rows_sacrifices_last_column() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.clear(Cell::plain('#'));
        fb.terminate_rows();
        assert_eq!(fb.to_text(), "##\n##\n");
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!(fb.cells().len(), 15);
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
