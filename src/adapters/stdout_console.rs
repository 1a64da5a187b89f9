use crate::ports::Console;

/// Console writing to the process stdout.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}
