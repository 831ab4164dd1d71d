//! Terminal falling-block puzzle game.
//!
//! `core` holds the deterministic engine (field grid, figure catalog, tick
//! state machine), `input` the background key listener, `term` everything
//! that touches the terminal, and `session` the loop that ties them together.

pub mod core;
pub mod input;
pub mod session;
pub mod term;
pub mod types;
