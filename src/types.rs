//! Core types shared across the application
//! This module contains pure data types with no external dependencies
//! beyond the fixed-capacity cell buffer.

use arrayvec::ArrayVec;

/// Accepted range for the configurable field dimensions (inclusive).
pub const MIN_FIELD_DIM: u16 = 10;
pub const MAX_FIELD_DIM: u16 = 50;

/// Gravity timing (in milliseconds): the delay between ticks starts at
/// `BASE_FALL_MS` and shrinks by `FALL_STEP_MS` per cleared row, never
/// dropping below `FALL_FLOOR_MS`.
pub const BASE_FALL_MS: u64 = 1000;
pub const FALL_STEP_MS: u64 = 10;
pub const FALL_FLOOR_MS: u64 = 100;

/// Number of colors a figure can lock with. Cell tags `2..2+FIGURE_COLOR_COUNT`
/// map back to a color index by subtracting 2.
pub const FIGURE_COLOR_COUNT: u32 = 12;

/// A cell position in doubled-x space: each logical field column spans two
/// adjacent character columns, so horizontal steps are always +-2.
pub type Coord = (i16, i16);

/// Largest figure in the catalog occupies 8 cells.
pub const MAX_FIGURE_CELLS: usize = 8;

/// The occupied cells of an active figure.
pub type FigureCells = ArrayVec<Coord, MAX_FIGURE_CELLS>;

/// Commands produced by the input listener, consumed at most once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    HardDrop,
    Restart,
    Quit,
}

/// Translation direction for an active figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Per-cell offset in doubled-x space.
    pub fn offset(self) -> Coord {
        match self {
            Direction::Left => (-2, 0),
            Direction::Right => (2, 0),
            Direction::Down => (0, 1),
        }
    }
}
