mod confirm;
mod source;

pub use confirm::{confirm_suffix, parse_confirmation};
pub use source::LineSource;

use std::io::{self, Stdin, Stdout, Write};

use crate::error::{Error, Result};

/// Prompts the user on an output sink and reads answers from a line source.
///
/// Both ends are fixed at construction. Only a console reading from the real
/// process stdin can take passwords; see [`Console::get_password`].
#[derive(Debug)]
pub struct Console<R = Stdin, W = Stdout> {
    input: R,
    output: W,
}

impl Console {
    /// A console on the process stdin and stdout.
    pub fn new() -> Self {
        Self::with_streams(io::stdin(), io::stdout())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Console<Stdin, W> {
    /// Read from the process stdin but write prompts to `output`.
    pub fn with_output(output: W) -> Self {
        Self::with_streams(io::stdin(), output)
    }
}

impl<R: LineSource, W: Write> Console<R, W> {
    pub fn with_streams(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn input(&self) -> &R {
        &self.input
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write `prompt` as is and read one line, returned with surrounding
    /// whitespace trimmed.
    ///
    /// Nothing is read if the prompt cannot be written. A line must end in a
    /// newline: running out of input first is a [`Error::Read`].
    pub fn get_input(&mut self, prompt: &str) -> Result<String> {
        self.write_out(prompt)?;

        let line = source::read_terminated_line(&mut self.input).map_err(Error::Read)?;
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question. An empty answer picks `default_yes`.
    pub fn get_confirm(&mut self, prompt: &str, default_yes: bool) -> Result<bool> {
        let full_prompt = format!("{}{}", prompt, confirm_suffix(default_yes));
        let answer = self.get_input(&full_prompt)?;
        parse_confirmation(&answer, default_yes)
    }

    /// Write `prompt` and read a line from stdin with terminal echo turned off.
    ///
    /// Fails with [`Error::NotStdin`] after writing the prompt unless this
    /// console reads from the process stdin. Echo is restored once the line
    /// is read, whatever the outcome. The text comes back untrimmed, minus
    /// its line terminator, and a newline is written once it is read.
    pub fn get_password(&mut self, prompt: &str) -> Result<String> {
        self.write_out(prompt)?;

        if !self.input.is_stdin() {
            return Err(Error::NotStdin);
        }

        let password = rpassword::read_password().map_err(Error::ReadPassword)?;

        self.write_out("\n")?;
        Ok(password)
    }

    fn write_out(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).map_err(Error::Write)?;
        self.output.flush().map_err(Error::Write)
    }
}
