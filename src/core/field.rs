//! Field module - the playing-field grid in doubled-x space.
//!
//! The grid is `(width+2)*2` columns by `height+2` rows of `u8` tags:
//! `0` empty, `1` border, `c+2` locked with figure-color index `c`.
//! The border ring is two physical columns thick on the x-axis (one logical
//! column) and one row thick on the y-axis, and never changes after creation.
//! Coordinates with `y <= 0` count as free so figures can spawn overlapping
//! the ceiling.

use crate::types::FigureCells;

/// The playing field - a flat row-major tag matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Logical interior width in columns.
    width: usize,
    /// Logical interior height in rows.
    height: usize,
    /// Flat array of tags, row-major (y * cols + x).
    cells: Vec<u8>,
}

impl Field {
    /// Create an empty field with the border ring in place.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width as usize;
        let height = height as usize;
        let cols = (width + 2) * 2;
        let rows = height + 2;

        let mut cells = vec![0u8; cols * rows];
        for y in 0..rows {
            for x in 0..cols {
                let border = x < 2 || x >= (width + 1) * 2 || y == 0 || y == rows - 1;
                if border {
                    cells[y * cols + x] = 1;
                }
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Logical interior width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Logical interior height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Physical column count (doubled-x space, borders included).
    pub fn cols(&self) -> usize {
        (self.width + 2) * 2
    }

    /// Physical row count (borders included).
    pub fn rows(&self) -> usize {
        self.height + 2
    }

    /// Tag at a physical position. Out-of-range access is a programming bug
    /// and panics.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.cols() && y < self.rows(), "cell ({x}, {y}) out of bounds");
        self.cells[y * self.cols() + x]
    }

    /// Overwrite a tag directly. Test and setup hook; gameplay mutation goes
    /// through `lock` and `clear_row`.
    pub fn set(&mut self, x: usize, y: usize, tag: u8) {
        assert!(x < self.cols() && y < self.rows(), "cell ({x}, {y}) out of bounds");
        let cols = self.cols();
        self.cells[y * cols + x] = tag;
    }

    /// True if the position blocks a figure: above the visible field
    /// (`y <= 0`) is never occupied, everything else is occupied when its
    /// tag is non-zero (borders included).
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        if y <= 0 {
            return false;
        }
        self.get(x as usize, y as usize) != 0
    }

    /// True if any cell of a candidate figure position is occupied.
    pub fn collides(&self, cells: &FigureCells) -> bool {
        cells.iter().any(|&(x, y)| self.is_occupied(x, y))
    }

    /// Convert an active figure into locked cells tagged with its color.
    /// Cells at or above the ceiling (`y <= 0`) are dropped.
    pub fn lock(&mut self, cells: &FigureCells, color: u8) {
        for &(x, y) in cells {
            if y > 0 {
                self.set(x as usize, y as usize, color + 2);
            }
        }
    }

    /// Scan for a completely filled interior row.
    ///
    /// The outer scan walks bottom-to-top and the last assignment wins, so
    /// when several rows are simultaneously full the topmost one is returned.
    /// The inner scan steps by 2 because each logical column owns two
    /// physical cells that are always written together.
    pub fn find_filled_row(&self) -> Option<usize> {
        let cols = self.cols();
        let mut filled = None;
        for y in (1..self.rows() - 1).rev() {
            for x in (2..cols - 2).step_by(2) {
                if self.get(x, y) == 0 {
                    break;
                }
                if x == cols - 4 {
                    filled = Some(y);
                }
            }
        }
        filled
    }

    /// Remove one filled row, returning a rebuilt grid of the same
    /// dimensions: rows above the cleared one shift down by one, rows below
    /// it are untouched, and row 1 becomes empty-with-borders. A full rebuild
    /// keeps the row-index bookkeeping trivially checkable.
    pub fn clear_row(&self, row: usize) -> Field {
        debug_assert!(row >= 1 && row < self.rows() - 1, "cannot clear border row {row}");

        let cols = self.cols();
        let mut next = vec![0u8; self.cells.len()];

        // Fresh row just below the top border.
        for x in 0..cols {
            next[cols + x] = u8::from(x < 2 || x >= cols - 2);
        }

        for y in (0..self.rows()).rev() {
            let target = if y > row || y == 0 {
                y
            } else if y == row {
                continue;
            } else {
                y + 1
            };
            next[target * cols..(target + 1) * cols]
                .copy_from_slice(&self.cells[y * cols..(y + 1) * cols]);
        }

        Field {
            width: self.width,
            height: self.height,
            cells: next,
        }
    }
}
