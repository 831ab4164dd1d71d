//! Session driver: the render / input / tick cycle for one game.
//!
//! Two timelines cooperate here: the input listener thread fills a
//! single-slot mailbox, and this loop drains it once per tick, right before
//! gravity. The loop owns all terminal output; the listener never draws.

use std::thread;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::core::GameState;
use crate::input::InputController;
use crate::term::{CellStyle, FrameBuffer, GameView, Hue, TerminalRenderer};
use crate::types::Command;

/// How a session ended, as seen by the startup loop in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Go back to field-dimension setup and play again.
    Restart,
    /// Terminate the process.
    Exit,
}

const RESTART_PROMPT: &str =
    "Are you sure you want to restart? Please enter Y/N to try again/exit: ";
const RETRY_PROMPT: &str =
    "Do you want to try again? Please enter Y/N to try again/exit: ";

/// Play one game on a fresh field. Enters raw mode for the duration and
/// always restores the terminal, even when the loop errors.
pub fn run(width: u16, height: u16, seed: u32) -> Result<SessionEnd> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run_loop(&mut term, width, height, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run_loop(
    term: &mut TerminalRenderer,
    width: u16,
    height: u16,
    seed: u32,
) -> Result<SessionEnd> {
    let mut game = GameState::new(width, height, seed);
    let view = GameView;
    let input = InputController::spawn()?;

    loop {
        let fb = view.render(&game);
        term.draw(&fb)?;

        let command = match input.poll() {
            Some(Command::Quit) => return Ok(SessionEnd::Exit),
            Some(Command::Restart) => {
                input.suspend();
                let restart = wait_yes_no(
                    term,
                    &fb,
                    GameView::prompt_row(height),
                    RESTART_PROMPT,
                )?;
                input.resume();
                if restart {
                    return Ok(SessionEnd::Restart);
                }
                None
            }
            other => other,
        };

        game.tick(command);

        if game.game_over() {
            // Stop the listener before the game-over dialog reads keys.
            drop(input);
            return game_over_screen(term, game.score());
        }

        thread::sleep(game.fall_interval());
    }
}

/// Final screen: red GAME OVER banner, the score, and a retry confirmation.
fn game_over_screen(term: &mut TerminalRenderer, score: u32) -> Result<SessionEnd> {
    let mut fb = FrameBuffer::new(72, 5);
    let banner = CellStyle {
        fg: Hue::Red,
        bg: Hue::Black,
        bold: true,
    };
    fb.put_str(0, 0, "GAME OVER", banner);
    fb.put_str(0, 1, &format!("Your score is {score}"), CellStyle::default());

    if wait_yes_no(term, &fb, 3, RETRY_PROMPT)? {
        Ok(SessionEnd::Restart)
    } else {
        Ok(SessionEnd::Exit)
    }
}

/// Raw-mode y/n confirmation on the given framebuffer row. Re-prompts with
/// an "Incorrect selection." prefix on any other key.
fn wait_yes_no(
    term: &mut TerminalRenderer,
    base: &FrameBuffer,
    prompt_row: u16,
    prompt: &str,
) -> Result<bool> {
    let mut invalid = false;
    loop {
        let mut frame = base.clone();
        let line = if invalid {
            format!("Incorrect selection. {prompt}")
        } else {
            prompt.to_string()
        };
        frame.put_str(0, prompt_row, &line, CellStyle::default());
        term.draw(&frame)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
                KeyCode::Char('n') | KeyCode::Char('N') => return Ok(false),
                _ => invalid = true,
            }
        }
    }
}
