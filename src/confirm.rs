//! Typed confirmation gate for destructive jobs.
//!
//! A job may only start its mutation loop after [`Confirmation::confirm`]
//! returns `true`. Anything other than the exact answer `yes` (end of input
//! included) declines.

use std::io::{self, BufRead, Write};

use crate::constants::confirm::CONFIRMATION;
use crate::error::Result;

/// Asks the operator to approve a destructive operation.
pub trait Confirmation {
    /// Show `prompt` and report whether the operator approved.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Prompt over an arbitrary reader/writer pair.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Read answers from `input`, write prompts to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was prompted.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Confirmation for Prompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{prompt} (yes/no): ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(is_confirmation(&answer))
    }
}

/// Prompt on the terminal.
///
/// Locks stdin only for the duration of one question.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Confirmation for TerminalPrompt {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Prompt::new(io::stdin().lock(), io::stdout()).confirm(prompt)
    }
}

/// Whether a raw input line is the confirmation word, ignoring only the line ending.
fn is_confirmation(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == CONFIRMATION
}
