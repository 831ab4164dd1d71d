//! Game state module - owns the field, the active figure and the score,
//! and runs one simulation tick at a time.
//!
//! A tick applies the pending command (if any) before the unconditional
//! gravity step, so a command observed between ticks always takes effect in
//! the same tick. Locking, game over and the line-clear pass all happen
//! inline within the tick; the driver only sees the resulting state and the
//! next fall interval.

use std::time::Duration;

use crate::core::field::Field;
use crate::core::figures::{self, spawn_figure, FigureKind};
use crate::core::rng::SimpleRng;
use crate::types::{
    Command, Direction, FigureCells, BASE_FALL_MS, FALL_FLOOR_MS, FALL_STEP_MS,
};

/// Delay before the next tick for a given score: shrinks linearly with each
/// cleared row and never goes below the floor.
pub fn fall_interval(score: u32) -> Duration {
    let ms = BASE_FALL_MS
        .saturating_sub(FALL_STEP_MS * score as u64)
        .max(FALL_FLOOR_MS);
    Duration::from_millis(ms)
}

/// Complete state of one game session.
#[derive(Debug, Clone)]
pub struct GameState {
    field: Field,
    figure: FigureCells,
    color: u8,
    score: u32,
    rng: SimpleRng,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given field dimensions and RNG seed; the
    /// first figure spawns immediately.
    pub fn new(width: u16, height: u16, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let field = Field::new(width, height);
        let (figure, color) = spawn_figure(&mut rng, width);
        Self {
            field,
            figure,
            color,
            score: 0,
            rng,
            game_over: false,
        }
    }

    /// Like `new`, but with a caller-chosen first figure. Deterministic hook
    /// for scenario tests and demos.
    pub fn with_figure(
        width: u16,
        height: u16,
        seed: u32,
        kind: FigureKind,
        anchor_x: i16,
        color: u8,
    ) -> Self {
        let mut state = Self::new(width, height, seed);
        state.figure = kind.cells((anchor_x, 1));
        state.color = color;
        state
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn figure(&self) -> &FigureCells {
        &self.figure
    }

    pub fn color(&self) -> u8 {
        self.color
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current delay until the next tick.
    pub fn fall_interval(&self) -> Duration {
        fall_interval(self.score)
    }

    /// Run one simulation tick with an optional pending command.
    ///
    /// Restart and quit are session-level concerns; if such a command reaches
    /// here it is ignored.
    pub fn tick(&mut self, command: Option<Command>) {
        if self.game_over {
            return;
        }

        match command {
            Some(Command::MoveLeft) => self.try_shift(Direction::Left),
            Some(Command::MoveRight) => self.try_shift(Direction::Right),
            Some(Command::HardDrop) => self.hard_drop(),
            _ => {}
        }

        // Gravity runs every tick, whether or not a command was applied.
        let next = figures::shifted(&self.figure, Direction::Down);
        if !self.field.collides(&next) {
            self.figure = next;
        } else {
            // A figure blocked before fully entering the visible field means
            // the stack has reached the ceiling.
            if self.figure.iter().any(|&(_, y)| y < 1) {
                self.game_over = true;
                return;
            }
            self.field.lock(&self.figure, self.color);
            self.spawn_next();
        }

        // One row per tick; when several rows are full the topmost clears
        // first and the rest follow on later ticks.
        if let Some(row) = self.field.find_filled_row() {
            self.score += 1;
            self.field = self.field.clear_row(row);
        }
    }

    /// Move the active figure one logical column if nothing blocks it.
    /// The border ring doubles as the bounds check.
    fn try_shift(&mut self, direction: Direction) {
        let candidate = figures::shifted(&self.figure, direction);
        if !self.field.collides(&candidate) {
            self.figure = candidate;
        }
    }

    /// Drop until resting, without consuming extra ticks. The following
    /// gravity step then detects the collision and locks the figure.
    fn hard_drop(&mut self) {
        loop {
            let next = figures::shifted(&self.figure, Direction::Down);
            if self.field.collides(&next) {
                break;
            }
            self.figure = next;
        }
    }

    fn spawn_next(&mut self) {
        let (figure, color) = spawn_figure(&mut self.rng, self.field.width() as u16);
        self.figure = figure;
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fall_interval_scales_with_score() {
        assert_eq!(fall_interval(0), Duration::from_millis(1000));
        assert_eq!(fall_interval(7), Duration::from_millis(930));
        assert_eq!(fall_interval(90), Duration::from_millis(100));
        // Floored, never zero or negative.
        assert_eq!(fall_interval(90_000), Duration::from_millis(100));
    }

    #[test]
    fn test_new_game_spawns_in_the_ceiling_band() {
        let state = GameState::new(10, 10, 42);
        // Every variant occupies its anchor row; the deepest any of them
        // reaches on spawn is row 2.
        assert!(state.figure().iter().any(|&(_, y)| y == 1));
        assert!(state.figure().iter().all(|&(_, y)| (-2..=2).contains(&y)));
        assert!(!state.game_over());
        assert_eq!(state.score(), 0);
    }
}
