/// Terminal settings of stdin, captured before any prompt runs.
///
/// Secret prompts switch echo off for the duration of a read. A signal that
/// ends the process mid-read skips that cleanup, so the interrupt path puts
/// the captured settings back.
#[derive(Debug, Default)]
pub struct TerminalState {
    saved: Option<sys::Termios>,
}

impl TerminalState {
    /// Snapshot stdin's settings. Non-terminal stdin captures nothing.
    pub fn capture() -> Self {
        Self { saved: sys::capture() }
    }

    pub fn is_captured(&self) -> bool {
        self.saved.is_some()
    }

    /// Put the captured settings back on stdin.
    pub fn restore(&self) {
        if let Some(saved) = &self.saved {
            sys::restore(saved);
        }
    }
}

#[cfg(unix)]
mod sys {
    use std::io::{self, IsTerminal};
    use std::os::fd::AsFd;

    use nix::sys::termios::{self, SetArg};
    use tracing::warn;

    pub(super) use nix::sys::termios::Termios;

    pub(super) fn capture() -> Option<Termios> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return None;
        }
        termios::tcgetattr(stdin.as_fd())
            .map_err(|err| warn!(error = %err, "failed to read terminal settings"))
            .ok()
    }

    pub(super) fn restore(saved: &Termios) {
        if let Err(err) = termios::tcsetattr(io::stdin().as_fd(), SetArg::TCSANOW, saved) {
            warn!(error = %err, "failed to restore terminal settings");
        }
    }
}

#[cfg(not(unix))]
mod sys {
    pub(super) type Termios = ();

    pub(super) fn capture() -> Option<Termios> {
        None
    }

    pub(super) fn restore(_saved: &Termios) {}
}
