//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Hue, FIGURE_HUES};

/// Rows reserved below the field for the score line, the restart hint and
/// the confirmation prompt.
const TEXT_ROWS: u16 = 4;

/// Minimum framebuffer width so status and prompt lines never clip on
/// narrow fields.
const MIN_FB_WIDTH: u16 = 72;

/// Projects the game state into a framebuffer, top-left anchored.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Row of the score line for a field of the given logical height.
    pub fn score_row(field_height: u16) -> u16 {
        field_height + 3
    }

    /// Row of the "press spacebar" hint.
    pub fn hint_row(field_height: u16) -> u16 {
        field_height + 4
    }

    /// Row used for in-game confirmation prompts.
    pub fn prompt_row(field_height: u16) -> u16 {
        field_height + 5
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, state: &GameState) -> FrameBuffer {
        let field = state.field();
        let cols = field.cols() as u16;
        let rows = field.rows() as u16;
        let height = field.height() as u16;

        let mut fb = FrameBuffer::new(cols.max(MIN_FB_WIDTH), rows + TEXT_ROWS);

        // Field cells: empty is white, border is black, locked cells keep
        // their figure color.
        for y in 0..rows {
            for x in 0..cols {
                let bg = match field.get(x as usize, y as usize) {
                    0 => Hue::White,
                    1 => Hue::Black,
                    tag => FIGURE_HUES[(tag - 2) as usize],
                };
                fb.put_char(x, y, ' ', CellStyle::solid(bg));
            }
        }

        // Active figure on top; cells above the visible field stay hidden.
        let hue = FIGURE_HUES[state.color() as usize];
        for &(x, y) in state.figure() {
            if y > 0 {
                fb.put_char(x as u16, y as u16, ' ', CellStyle::solid(hue));
            }
        }

        let text = CellStyle::default();
        fb.put_str(
            0,
            Self::score_row(height),
            &format!("Your score is {}", state.score()),
            text,
        );
        fb.put_str(0, Self::hint_row(height), "Press spacebar to restart", text);

        fb
    }
}
