use crate::ports::Console;

/// Console that keeps every line for assertions.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: Vec<String>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Console for RecordingConsole {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
