//! Line-oriented console for playing and debugging a match by hand.
//!
//! Each input line is a command or move text; each answer is one or more
//! lines prefixed with a keyword so scripts can follow along:
//!
//! ```text
//! > e2e4          MOVE e2e4
//! > e2e5          INVALID Piece cannot move that way
//! > board         8 r n b q k b n r ...
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Color, PieceLetters, RenderStyle};
use crate::game::Match;
use crate::notation::MoveRequest;
use crate::trace::debug_log;

pub mod command;

use command::{parse_console_command, ConsoleCommand};

const HELP: &str = "\
commands:
  <from><to>            play a move, e.g. e2e4 or e2-e4
  board                 print the board
  new                   start a new game
  fen [<fen>]           print the position or load one
  style english|french  piece letters for the board
  turn | check | mate   query the game
  quit";

/// Session state behind the console: the match and how to draw it.
#[derive(Debug, Default)]
pub struct Console {
    game: Match,
    style: RenderStyle,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn side_name(color: Color) -> String {
    color.to_string().to_lowercase()
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Run one command and write its answer.
    pub fn execute<W: Write>(&mut self, cmd: ConsoleCommand, out: &mut W) -> io::Result<Flow> {
        match cmd {
            ConsoleCommand::Board => writeln!(out, "{}", self.game.board().render(self.style))?,
            ConsoleCommand::NewGame => {
                self.game = Match::new();
                writeln!(out, "OK")?;
            }
            ConsoleCommand::Fen(None) => writeln!(out, "FEN {}", self.game.to_fen())?,
            ConsoleCommand::Fen(Some(fen)) => match Match::try_from_fen(&fen) {
                Ok(game) => {
                    self.game = game;
                    writeln!(out, "OK")?;
                }
                Err(err) => writeln!(out, "ERROR {err}")?,
            },
            ConsoleCommand::Style(name) => {
                let letters = match name.as_deref() {
                    Some("english") => Some(PieceLetters::English),
                    Some("french") => Some(PieceLetters::French),
                    _ => None,
                };
                match letters {
                    Some(letters) => {
                        self.style.letters = letters;
                        writeln!(out, "OK")?;
                    }
                    None => writeln!(out, "ERROR style must be english or french")?,
                }
            }
            ConsoleCommand::Turn => {
                writeln!(out, "TURN {}", side_name(self.game.side_to_move()))?;
            }
            ConsoleCommand::Check => match self.game.is_in_check() {
                Some(color) => writeln!(out, "CHECK {}", side_name(color))?,
                None => writeln!(out, "NONE")?,
            },
            ConsoleCommand::Mate => {
                let side = self.game.side_to_move();
                if self.game.is_checkmate(side) {
                    writeln!(out, "MATE {}", side_name(side))?;
                } else {
                    writeln!(out, "NONE")?;
                }
            }
            ConsoleCommand::Help => writeln!(out, "{HELP}")?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
            ConsoleCommand::Move(text) => self.play(&text, out)?,
        }
        Ok(Flow::Continue)
    }

    fn play<W: Write>(&mut self, text: &str, out: &mut W) -> io::Result<()> {
        let request = match MoveRequest::parse(text) {
            Ok(request) => request,
            Err(err) => return writeln!(out, "ERROR {err}"),
        };
        match self.game.attempt_move(request.from, request.to) {
            Ok(outcome) => {
                writeln!(out, "MOVE {}", MoveRequest::outbound(&outcome))?;
                self.game.clear_castle_flags();
                if let Some(color) = outcome.checks {
                    writeln!(out, "CHECK {}", side_name(color))?;
                }
                if outcome.is_mate {
                    writeln!(out, "MATE {}", side_name(outcome.color.opponent()))?;
                }
                Ok(())
            }
            Err(err) => writeln!(out, "INVALID {err}"),
        }
    }
}

/// Read commands from `input` until it ends or `quit`, answering on `output`.
pub fn run_console<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut console = Console::new();
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_console_command(&line) else {
            continue;
        };
        debug_log!("console: {cmd:?}");
        if console.execute(cmd, &mut output)? == Flow::Quit {
            break;
        }
        output.flush()?;
    }
    Ok(())
}
