//! Blockfall runner.
//!
//! Dimension setup runs in cooked mode; each session then owns the terminal
//! in raw mode until it ends. Restarting (from the spacebar dialog or the
//! game-over screen) re-enters dimension setup with a fresh seed.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::session::{self, SessionEnd};
use blockfall::term::prompt;

fn main() -> Result<()> {
    loop {
        let (width, height) = prompt::read_field_dimensions()?;
        match session::run(width, height, seed_from_clock())? {
            SessionEnd::Restart => continue,
            SessionEnd::Exit => break,
        }
    }
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0x9E37_79B9)
}
