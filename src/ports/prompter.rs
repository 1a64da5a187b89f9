use crate::domain::AppError;

/// Port for reading operator answers.
///
/// Plain input and secret input are separate so that a secret never echoes.
pub trait Prompter {
    /// Read one line of visible input.
    fn input(&mut self, prompt: &str) -> Result<String, AppError>;

    /// Read one line without echoing the typed characters.
    fn secret(&mut self, prompt: &str) -> Result<String, AppError>;
}
