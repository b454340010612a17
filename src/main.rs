//! Tetris Stack console runner (default binary).
//!
//! Reads menu choices from stdin, one per line, and prints the queue and
//! reserve after every turn. Exits with status 0 on the exit choice or at
//! end of input.

use std::io::{self, BufWriter};

use anyhow::Result;
use crossterm::tty::IsTty;

use tetris_stack::core::GameState;
use tetris_stack::journal::Journal;
use tetris_stack::{AppConfig, Session};

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    let stdout = io::stdout();
    let color = config.color && stdout.is_tty();
    let journal = Journal::open_or_disabled(config.log_path.as_deref());

    let stdin = io::stdin();
    let mut session = Session::new(
        GameState::new(config.seed),
        stdin.lock(),
        BufWriter::new(stdout.lock()),
        color,
        journal,
    );
    session.run()?;
    Ok(())
}
