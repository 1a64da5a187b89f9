use std::io::{BufRead, Write};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter for non-terminal stdin (pipes, heredocs, CI).
///
/// Prompts go to `output`; answers are read one line at a time from `input`.
/// End of input is treated as a cancelled run.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::Interrupted);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, prompt: &str) -> Result<String, AppError> {
        self.read_answer(prompt)
    }

    fn secret(&mut self, prompt: &str) -> Result<String, AppError> {
        // Piped input is not echoed by a terminal, so this is the same read.
        let answer = self.read_answer(prompt)?;
        writeln!(self.output)?;
        Ok(answer)
    }
}
