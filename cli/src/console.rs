//! Line-oriented prompts and output, generic over the streams so commands
//! can be driven from memory in tests.

use std::io::{BufRead, Write};

use crate::error::CliError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one trimmed line.
    pub fn prompt(&mut self, label: &'static str) -> Result<String, CliError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::MissingInput(label));
        }
        Ok(line.trim().to_string())
    }

    pub fn prompt_integer(&mut self, label: &'static str) -> Result<i64, CliError> {
        let value = self.prompt(label)?;
        value
            .parse()
            .map_err(|_| CliError::InvalidNumber { field: label, value })
    }

    pub fn println(&mut self, line: impl std::fmt::Display) -> Result<(), CliError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
