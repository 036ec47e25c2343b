//! The human seat: prompts on a text stream and reads typed actions.

use std::io::{BufRead, Write};

use tablestakes_engine::history::ActionRecord;
use tablestakes_engine::provider::{ActionProvider, ActionRequest, Observation, ProviderError};
use tracing::debug;

use crate::formatters::{format_board, format_cards, format_record};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

/// Why the console stopped taking input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// The player typed `q`
    Quit,
    /// Input closed
    Eof,
}

/// An [`ActionProvider`] backed by a reader and a writer.
///
/// Built per hand, since it borrows the terminal streams. Once the player
/// quits or input closes, every further decision is a fold and
/// [`ConsoleProvider::finish`] reports why.
pub struct ConsoleProvider<'a> {
    name: String,
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    shown: usize,
    last_prompt: Option<usize>,
    stop: Option<Stop>,
}

impl<'a> ConsoleProvider<'a> {
    pub fn new(
        name: impl Into<String>,
        input: &'a mut dyn BufRead,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
    ) -> Self {
        Self {
            name: name.into(),
            input,
            out,
            err,
            shown: 0,
            last_prompt: None,
            stop: None,
        }
    }

    /// Releases the streams. Returns how many log entries were printed and
    /// whether the player asked to stop.
    pub fn finish(self) -> (usize, Option<Stop>) {
        (self.shown, self.stop)
    }

    fn show(&mut self, state: &Observation, history: &[ActionRecord]) -> std::io::Result<()> {
        for record in history.iter().skip(self.shown) {
            writeln!(self.out, "  {}", format_record(record))?;
        }
        self.shown = history.len();

        if self.last_prompt == Some(history.len()) {
            ui::display_warning(self.err, "that action is not allowed here")?;
        }
        self.last_prompt = Some(history.len());

        writeln!(
            self.out,
            "{} {}  pot {}",
            state.phase.as_str(),
            format_board(&state.board_cards()),
            state.pot
        )?;
        writeln!(
            self.out,
            "Your cards: {}  stack {}  to call {}",
            format_cards(&state.hole_cards()),
            state.own_stack(),
            state.to_call()
        )
    }

    fn read_action(&mut self) -> std::io::Result<ActionRequest> {
        loop {
            write!(self.out, "Enter action (fold/check/call/bet N/raise N/allin/q): ")?;
            self.out.flush()?;

            let Some(line) = read_stdin_line(self.input) else {
                self.stop = Some(Stop::Eof);
                return Ok(ActionRequest::fold());
            };
            match parse_player_action(&line) {
                ParseResult::Action(request) => return Ok(request),
                ParseResult::Quit => {
                    self.stop = Some(Stop::Quit);
                    return Ok(ActionRequest::fold());
                }
                ParseResult::BadAmount(msg) => {
                    ui::display_warning(self.err, &format!("{}; folding", msg))?;
                    return Ok(ActionRequest::fold());
                }
                ParseResult::Invalid(msg) => ui::write_error(self.err, &msg)?,
            }
        }
    }
}

impl ActionProvider for ConsoleProvider<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(
        &mut self,
        state: &Observation,
        history: &[ActionRecord],
    ) -> Result<ActionRequest, ProviderError> {
        if self.stop.is_some() {
            return Ok(ActionRequest::fold());
        }
        let io = |e: std::io::Error| ProviderError::Unavailable(e.to_string());
        self.show(state, history).map_err(io)?;
        let request = self.read_action().map_err(io)?;
        debug!(?request, "console action");
        Ok(request)
    }
}
