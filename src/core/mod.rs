//! Core game engine: field grid, figure catalog, RNG and the tick state
//! machine. Everything here is pure and deterministic given a seed.

pub mod field;
pub mod figures;
pub mod game_state;
pub mod rng;

pub use field::Field;
pub use figures::{shifted, spawn_figure, FigureKind};
pub use game_state::{fall_interval, GameState};
pub use rng::SimpleRng;
