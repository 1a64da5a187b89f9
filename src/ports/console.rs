/// Port for user-facing output lines.
pub trait Console {
    fn line(&mut self, text: &str);

    fn blank(&mut self) {
        self.line("");
    }
}
