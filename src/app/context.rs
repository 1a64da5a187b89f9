use crate::ports::{ArtifactStore, Console, Prompter};

/// Application context holding the I/O ports for command execution.
pub struct AppContext<P: Prompter, C: Console, S: ArtifactStore> {
    prompter: P,
    console: C,
    store: S,
}

impl<P: Prompter, C: Console, S: ArtifactStore> AppContext<P, C, S> {
    /// Create a new application context.
    pub fn new(prompter: P, console: C, store: S) -> Self {
        Self { prompter, console, store }
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the ports, mainly so tests can inspect fakes.
    pub fn into_parts(self) -> (P, C, S) {
        (self.prompter, self.console, self.store)
    }
}
