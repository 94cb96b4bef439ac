//! Line-oriented driver for playing a game from a terminal.
//!
//! Each turn prints the active player and reads commands until the play
//! limit is reached or the player ends the turn:
//!
//! - `p <index>`: play a hand card
//! - `c <index>`: play a hand card as cash; properties are still placed
//! - `a <index> <color>`: choose the color of a wild card in hand
//! - `e`: end the turn
//!
//! Unparseable lines print `invalid input` and are not counted.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use crate::cards::{Color, ParseColorError};
use crate::core::{GameError, PlayerId};
use crate::game::{Game, TurnEnd};

const PROMPT: &str =
    "Play card: p {index}, Bank card: c {index}, Assign wild: a {index} {color}, End turn: e";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    Bank(usize),
    Assign(usize, Color),
    End,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("not a card index: {0}")]
    BadIndex(String),

    #[error(transparent)]
    BadColor(#[from] ParseColorError),

    #[error("unexpected argument: {0}")]
    TrailingArgument(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts.next().ok_or(CommandError::Empty)?;

        let command = match verb {
            "e" => Command::End,
            "p" => Command::Play(parse_index(parts.next())?),
            "c" => Command::Bank(parse_index(parts.next())?),
            "a" => {
                let index = parse_index(parts.next())?;
                let color = parts.next().ok_or(CommandError::MissingArgument("color"))?;
                Command::Assign(index, color.parse()?)
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match parts.next() {
            Some(extra) => Err(CommandError::TrailingArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_index(arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument("card index"))?;
    arg.parse().map_err(|_| CommandError::BadIndex(arg.to_string()))
}

#[derive(Error, Debug)]
pub enum LoopError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Why `TurnLoop::run` returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopEnd {
    Winner(PlayerId),
    InputClosed,
    TurnLimit,
}

pub struct TurnLoop<R, W> {
    game: Game,
    input: R,
    output: W,
    max_turns: Option<u32>,
}

impl<R: BufRead, W: Write> TurnLoop<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
            max_turns: None,
        }
    }

    /// Stop after this many completed turns.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }

    /// Play turns until someone wins, input runs out, or the turn limit.
    pub fn run(&mut self) -> Result<LoopEnd, LoopError> {
        let mut completed = 0;
        loop {
            if self.max_turns.is_some_and(|max| completed >= max) {
                return Ok(LoopEnd::TurnLimit);
            }

            self.game.start_turn()?;
            let closed = !self.play_turn()?;
            completed += 1;

            match self.game.end_turn() {
                TurnEnd::Winner(winner) => {
                    let name = self.game.active().name().to_string();
                    writeln!(self.output, "{name} has won!!")?;
                    return Ok(LoopEnd::Winner(winner));
                }
                TurnEnd::Next(next) => debug!(%next, "passing turn"),
            }

            if closed {
                return Ok(LoopEnd::InputClosed);
            }
        }
    }

    /// Read commands for one turn. Returns false once input is exhausted.
    fn play_turn(&mut self) -> Result<bool, LoopError> {
        let limit = self.game.config().plays_per_turn;
        let mut plays = 0;

        while plays < limit {
            write!(self.output, "{}", self.game.active())?;
            writeln!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    debug!(%err, line = line.trim(), "rejected command");
                    writeln!(self.output, "invalid input")?;
                    continue;
                }
            };

            let result = match command {
                Command::End => break,
                Command::Play(index) => self.game.play_card(index, false).map(Some),
                Command::Bank(index) => self.game.play_card(index, true).map(Some),
                Command::Assign(index, color) => self.game.assign_wild(index, color).map(|()| None),
            };
            match result {
                Ok(Some(outcome)) => {
                    debug!(?outcome, plays, "play counted");
                    plays += 1;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(%err, "command failed");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
        Ok(true)
    }
}
