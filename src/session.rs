//! Interactive session loop.
//!
//! One turn: print the menu and prompt, read a line, dispatch it, print the
//! status line and the resulting state. The loop ends on the exit choice or
//! when the input runs out, which is treated as exit.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::{GameState, Outcome};
use crate::input::{MenuReader, Selection};
use crate::journal::Journal;
use crate::term::ConsoleRenderer;
use crate::types::MenuChoice;

pub struct Session<R: BufRead, W: Write> {
    game: GameState,
    input: MenuReader<R>,
    renderer: ConsoleRenderer<W>,
    journal: Journal,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: GameState, input: R, output: W, color: bool, journal: Journal) -> Self {
        Self {
            game,
            input: MenuReader::new(input),
            renderer: ConsoleRenderer::new(output, color),
            journal,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Run until exit. Returns the number of turns dispatched.
    pub fn run(&mut self) -> Result<u32> {
        let snap = self.game.snapshot();
        self.journal.record_start(self.game.seed(), &snap);
        self.renderer.draw_state(&snap)?;

        while self.step()? != Outcome::Exit {}

        self.journal.record_exit(self.game.turns());
        Ok(self.game.turns())
    }

    /// Play a single turn.
    pub fn step(&mut self) -> Result<Outcome> {
        self.renderer.draw_menu()?;

        let (selection, typed) = match self.input.next_selection()? {
            Some(Selection::Invalid(raw)) => (Selection::Invalid(raw.clone()), raw),
            Some(Selection::Menu(choice)) => (Selection::Menu(choice), choice.code().to_string()),
            // End of input: leave as if exit had been typed.
            None => (Selection::Menu(MenuChoice::Exit), String::new()),
        };

        let outcome = self.game.apply(selection.choice());
        let snap = self.game.snapshot();

        self.renderer.draw_status(outcome.status_line().as_deref())?;
        self.renderer.draw_state(&snap)?;
        self.journal
            .record_turn(&typed, selection.code(), selection.choice(), &outcome, &snap);

        Ok(outcome)
    }

    pub fn into_output(self) -> W {
        self.renderer.into_inner()
    }
}
