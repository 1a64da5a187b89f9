mod artifact_store;
mod console;
mod prompter;

pub use artifact_store::{ArtifactStore, EnvFileStatus};
pub use console::Console;
pub use prompter::Prompter;
