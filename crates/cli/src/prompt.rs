//! Line-oriented prompt reader.

use core::fmt::Display;
use core::str::FromStr;
use std::io::{BufRead, Write};

use crate::config::InputMode;
use crate::error::CliError;

/// Writes a prompt, reads one line back.
///
/// Every prompt consumes exactly one input line. Prompts are written without a
/// trailing newline and flushed before the read blocks.
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    mode: InputMode,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, mode: InputMode) -> Self {
        Self {
            reader,
            writer,
            mode,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Print one full line.
    pub fn say(&mut self, line: impl Display) -> Result<(), CliError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Print text as-is (no newline added).
    pub fn print(&mut self, text: &str) -> Result<(), CliError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read a free-text field. Only the line terminator is removed.
    pub fn read_text(&mut self, prompt: &str, field: &'static str) -> Result<String, CliError> {
        self.ask(prompt, field)
    }

    /// Read and parse a field, trimming surrounding whitespace first.
    ///
    /// In `InputMode::Reprompt` a bad value is reported and the same prompt is
    /// shown again; in `InputMode::Abort` it is returned as `CliError::Parse`.
    pub fn read_parsed<T>(&mut self, prompt: &str, field: &'static str) -> Result<T, CliError>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            let raw = self.ask(prompt, field)?;
            let input = raw.trim();
            match input.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(field, input, error = %e, "rejected input");
                    match self.mode {
                        InputMode::Abort => {
                            return Err(CliError::Parse {
                                field,
                                input: input.to_string(),
                                reason: e.to_string(),
                            });
                        }
                        InputMode::Reprompt => {
                            self.say(format_args!("Invalid {field}: '{input}'. Please try again."))?;
                        }
                    }
                }
            }
        }
    }

    /// Read a whole number in the 32-bit range the console has always
    /// accepted, widened to `i64` for the store.
    pub fn read_int(&mut self, prompt: &str, field: &'static str) -> Result<i64, CliError> {
        let value: i32 = self.read_parsed(prompt, field)?;
        Ok(i64::from(value))
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, prompt: &str, field: &'static str) -> Result<String, CliError> {
        self.print(prompt)?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::UnexpectedEof { field });
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
