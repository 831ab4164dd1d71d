//! Startup prompts: field dimensions and yes/no confirmations.
//!
//! These run in cooked mode (line input, echo on), before the session enters
//! raw mode. Invalid input is recovered locally by re-prompting; nothing here
//! escalates past an I/O error.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::core::Field;
use crate::term::renderer::hue_to_color;
use crate::term::fb::Hue;
use crate::types::{MAX_FIELD_DIM, MIN_FIELD_DIM};

/// How long the transient "invalid input" message stays on screen.
const ERROR_DISPLAY: Duration = Duration::from_secs(2);

/// Ask for width and height, preview the resulting field and let the user
/// confirm or re-enter until satisfied.
pub fn read_field_dimensions() -> Result<(u16, u16)> {
    let mut stdout = io::stdout();
    stdout.queue(Clear(ClearType::All))?;
    stdout.queue(cursor::MoveTo(0, 0))?;
    stdout.flush()?;

    loop {
        let width = ask_int("Please enter the width of the playing field: ")?;
        let height = ask_int("Please enter the height of the playing field: ")?;
        println!("With given dimensions the playing field will look like this: ");
        print_field_preview(width, height)?;
        if ask_yes_no("Press Y/N to set/change dimensions: ")? {
            return Ok((width, height));
        }
    }
}

/// Read an integer in [MIN_FIELD_DIM, MAX_FIELD_DIM], re-prompting with a
/// transient error message on anything else.
pub fn ask_int(prompt: &str) -> Result<u16> {
    let mut stdout = io::stdout();
    let stdin = io::stdin();

    loop {
        stdout.queue(Print(prompt))?;
        stdout.flush()?;

        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;

        match line.trim().parse::<u16>() {
            Ok(v) if (MIN_FIELD_DIM..=MAX_FIELD_DIM).contains(&v) => return Ok(v),
            _ => show_temp_error(&format!(
                "Only integers between {MIN_FIELD_DIM} and {MAX_FIELD_DIM} are accepted. Please try again"
            ))?,
        }
    }
}

/// Read a case-insensitive y/n answer, re-prompting on anything else.
pub fn ask_yes_no(prompt: &str) -> Result<bool> {
    let mut stdout = io::stdout();
    let stdin = io::stdin();

    loop {
        stdout.queue(Print(prompt))?;
        stdout.flush()?;

        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;

        match line.trim() {
            "Y" | "y" => return Ok(true),
            "N" | "n" => return Ok(false),
            _ => {
                stdout.queue(Print("Incorrect selection. "))?;
                stdout.flush()?;
            }
        }
    }
}

/// Show an error in red for a moment, then clear the line and return the
/// cursor so the prompt can repeat in place.
fn show_temp_error(message: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(SetForegroundColor(Color::Red))?;
    stdout.queue(Print(message))?;
    stdout.queue(ResetColor)?;
    stdout.flush()?;

    thread::sleep(ERROR_DISPLAY);

    stdout.queue(Print("\r"))?;
    stdout.queue(Clear(ClearType::CurrentLine))?;
    stdout.flush()?;
    Ok(())
}

/// Print an empty field carcass so the user can judge the dimensions.
fn print_field_preview(width: u16, height: u16) -> Result<()> {
    let field = Field::new(width, height);
    let mut stdout = io::stdout();

    for y in 0..field.rows() {
        for x in 0..field.cols() {
            let bg = if field.get(x, y) == 1 { Hue::Black } else { Hue::White };
            stdout.queue(SetBackgroundColor(hue_to_color(bg)))?;
            stdout.queue(Print(' '))?;
        }
        stdout.queue(ResetColor)?;
        stdout.queue(Print("\n"))?;
    }
    stdout.flush()?;
    Ok(())
}
