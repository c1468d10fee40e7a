//! The interactive game loop.
//!
//! Reads the human's moves from any `BufRead`, writes the board and
//! announcements to any `Write`, and drives AI turns through the engine.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use super::input::{parse_coord, InputError};
use crate::board::Coord;
use crate::core::{GameError, Pacing, PlayerId, RandomSource};
use crate::rules::{GameEngine, GameResult, MatchOutcome, ReshuffleOutcome};

/// Reasons the loop stops before the game ends.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("input closed before the game finished")]
    InputClosed,
    #[error("AI found no cells to reveal")]
    Stalled,
    #[error(transparent)]
    Engine(#[from] GameError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Drives one game between a human at a terminal and the AI.
pub struct Controller<R, I, O> {
    engine: GameEngine<R>,
    pacing: Pacing,
    input: I,
    output: O,
}

impl<R: RandomSource, I: BufRead, O: Write> Controller<R, I, O> {
    pub fn new(engine: GameEngine<R>, pacing: Pacing, input: I, output: O) -> Self {
        Self {
            engine,
            pacing,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Give back the output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Play until every pair is claimed.
    pub fn run(&mut self) -> Result<GameResult, ShellError> {
        writeln!(self.output, "\n🎉 Welcome to Purble Pairs Game: 2 Players Edition! 🍒\n")?;

        let result = loop {
            if let Some(result) = self.engine.result() {
                break result;
            }

            let player = self.engine.current_player();
            writeln!(self.output, "🎮 {player}'s turn")?;
            self.render()?;

            let (first, second) = match player {
                PlayerId::Human => self.human_reveals()?,
                PlayerId::Ai => self.ai_reveals()?,
            };
            self.render()?;

            let outcome = self.engine.resolve_turn(first, second)?;
            self.announce(&outcome)?;
        };

        self.announce_result(result)?;
        Ok(result)
    }

    fn human_reveals(&mut self) -> Result<(Coord, Coord), ShellError> {
        let first = self.prompt_reveal()?;
        self.render()?;
        let second = self.prompt_reveal()?;
        Ok((first, second))
    }

    /// Prompt until a cell is accepted by the engine.
    fn prompt_reveal(&mut self) -> Result<Coord, ShellError> {
        let mut line = String::new();
        loop {
            write!(self.output, "Enter row and col (e.g., 0 1): ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ShellError::InputClosed);
            }

            let attempt = parse_coord(&line).and_then(|coord| {
                self.engine.reveal_cell(coord)?;
                Ok(coord)
            });
            match attempt {
                Ok(coord) => return Ok(coord),
                Err(InputError::Malformed(_)) => {
                    writeln!(self.output, "Invalid input. Use format: row col")?;
                }
                Err(InputError::Move(err)) => {
                    debug!(%err, "rejected human move");
                    writeln!(self.output, "Invalid or already revealed cell. Try again.")?;
                }
            }
        }
    }

    fn ai_reveals(&mut self) -> Result<(Coord, Coord), ShellError> {
        writeln!(self.output, "🤖 AI is thinking...")?;
        self.pause(self.pacing.think)?;

        let (first, second) = self.engine.ai_turn().ok_or(ShellError::Stalled)?;
        writeln!(self.output, "🤖 AI selects {first} and {second}")?;
        self.engine.reveal_cell(first)?;
        self.engine.reveal_cell(second)?;
        Ok((first, second))
    }

    fn announce(&mut self, outcome: &MatchOutcome) -> Result<(), ShellError> {
        if outcome.matched {
            writeln!(self.output, "✅ MATCH FOUND!")?;
            return Ok(());
        }

        writeln!(self.output, "❌ NO MATCH! Switching Turn...")?;
        self.pause(self.pacing.hide)?;
        match outcome.penalty {
            Some(ReshuffleOutcome::Returned(symbol)) => writeln!(
                self.output,
                "\n🔄 Penalty reshuffling: the {symbol} pair returns to the board.\n"
            )?,
            Some(ReshuffleOutcome::NoRemovablePair) => {
                writeln!(self.output, "\n🔄 Penalty reshuffling: no matched pair to return.\n")?
            }
            None => {}
        }
        Ok(())
    }

    fn announce_result(&mut self, result: GameResult) -> Result<(), ShellError> {
        let (human, ai) = self.engine.scores();
        writeln!(self.output, "\n🏁 Game Over!")?;
        writeln!(self.output, "Final Scores => Player: {human}, AI: {ai}")?;
        let verdict = match result {
            GameResult::Winner(PlayerId::Human) => "🎉 You win!",
            GameResult::Winner(PlayerId::Ai) => "🤖 AI wins!",
            GameResult::Draw => "🤝 It's a tie!",
        };
        writeln!(self.output, "{verdict}")?;
        Ok(())
    }

    fn render(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\n{}", self.engine.board())?;
        Ok(())
    }

    fn pause(&mut self, delay: Duration) -> io::Result<()> {
        if !delay.is_zero() {
            self.output.flush()?;
            thread::sleep(delay);
        }
        Ok(())
    }
}
