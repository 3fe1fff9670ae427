//! The line-oriented prompt protocol.
//!
//! Each iteration prints the prefix hint, then asks two questions in a fixed
//! order. The exact prompt text is part of the tool's interface.

use crate::config::RensubConfig;
use crate::error::Result;
use std::io::{BufRead, Write};

pub const FROM_PROMPT: &str = "Replace from: ";
pub const TO_PROMPT: &str = "          to: ";
/// Shown when started without files; any line (or end of input) dismisses it.
pub const WAIT_PROMPT: &str = "D&D";

/// What the user answered to one round of prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Rule { from: String, to: String },
    Quit,
    EndOfInput,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs one round: hint line, `from` prompt, `to` prompt.
    ///
    /// End of input at either prompt yields [`Reply::EndOfInput`]. The quit
    /// command is only recognised as the `from` answer, and skips the `to` prompt.
    pub fn read_rule(&mut self, config: &RensubConfig) -> Result<Reply> {
        writeln!(self.output, "{} is prefix", config.prefix_marker)?;

        let Some(from) = self.ask(FROM_PROMPT)? else {
            return Ok(Reply::EndOfInput);
        };
        if config.is_quit(&from) {
            return Ok(Reply::Quit);
        }

        let Some(to) = self.ask(TO_PROMPT)? else {
            return Ok(Reply::EndOfInput);
        };

        Ok(Reply::Rule { from, to })
    }

    /// Prints `prompt` without a newline and reads one line.
    /// Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        strip_line_ending(&mut line);
        Ok(Some(line))
    }

    /// Blocks on the wait prompt once. End of input counts as an answer.
    pub fn wait(&mut self) -> Result<()> {
        self.ask(WAIT_PROMPT)?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Removes one trailing `\n` or `\r\n`. Other whitespace is part of the answer.
fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
