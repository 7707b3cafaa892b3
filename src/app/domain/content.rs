/// Editable text owned by a tab.
///
/// The application stores FLTK `TextBuffer`s; tests and headless callers use
/// plain `String`s.
pub trait TextContent {
    fn from_text(text: &str) -> Self;

    /// Full text, as written on save.
    fn text(&self) -> String;

    /// Called once when the owning tab is closed.
    fn release(&mut self) {}
}

impl TextContent for String {
    fn from_text(text: &str) -> Self {
        text.to_string()
    }

    fn text(&self) -> String {
        self.clone()
    }

    fn release(&mut self) {
        self.clear();
    }
}
