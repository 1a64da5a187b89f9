mod filesystem_artifact_store;
mod line_prompter;
mod stdout_console;
mod terminal_prompter;
mod terminal_state;

pub use filesystem_artifact_store::FilesystemArtifactStore;
pub use line_prompter::LinePrompter;
pub use stdout_console::StdoutConsole;
pub use terminal_prompter::TerminalPrompter;
pub use terminal_state::TerminalState;
