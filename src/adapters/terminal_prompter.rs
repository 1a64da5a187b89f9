use dialoguer::{Input, Password};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Interactive prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<String, AppError> {
        let value: String =
            Input::new().with_prompt(prompt).allow_empty(true).interact_text()?;
        Ok(value)
    }

    fn secret(&mut self, prompt: &str) -> Result<String, AppError> {
        let value = Password::new().with_prompt(prompt).allow_empty_password(true).interact()?;
        Ok(value)
    }
}
