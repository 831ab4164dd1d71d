//! Terminal layer: framebuffer, pure game view, crossterm renderer and the
//! cooked-mode startup prompts.

pub mod fb;
pub mod game_view;
pub mod prompt;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Hue, FIGURE_HUES};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
