use fltk::text::TextBuffer;

use crate::app::domain::content::TextContent;

impl TextContent for TextBuffer {
    fn from_text(text: &str) -> Self {
        let mut buffer = TextBuffer::default();
        buffer.set_text(text);
        buffer
    }

    fn text(&self) -> String {
        TextBuffer::text(self)
    }

    /// Drop the text right away. The editor may still be showing this
    /// buffer; `AppState` holds a handle on it until the next one is bound.
    fn release(&mut self) {
        self.set_text("");
    }
}
