use std::io;

use thiserror::Error;

/// Library-wide error type for deployenv operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The operator cancelled input (Ctrl-C or closed stdin).
    #[error("Process interrupted. Exiting...")]
    Interrupted,

    /// Terminal prompt failed for a reason other than cancellation.
    #[error("Failed to read input: {0}")]
    Prompt(String),

    /// Deploy script template failed to render.
    #[error("Failed to render deploy script: {0}")]
    Template(String),
}

impl AppError {
    /// Process exit code used by the CLI adapter.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Interrupted => 130,
            _ => 1,
        }
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io_err) if is_cancellation(&io_err) => AppError::Interrupted,
            dialoguer::Error::IO(io_err) => AppError::Prompt(io_err.to_string()),
        }
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Template(err.to_string())
    }
}

fn is_cancellation(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof)
}
