//! Port for the blocking user prompts the tab controller needs.
//!
//! The FLTK implementation lives in `ui::file_dialogs`; tests script answers.

/// Answer to the "save changes?" prompt shown before a modified tab goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

pub trait Dialogs {
    /// Ask for an existing file to open. `None` when the user cancels.
    fn pick_open_path(&mut self) -> Option<String>;

    /// Ask for a destination path. `None` when the user cancels.
    fn pick_save_path(&mut self) -> Option<String>;

    /// Three-way prompt for a modified document called `name`.
    fn confirm_save(&mut self, name: &str) -> SaveChoice;

    /// Show a blocking error message.
    fn report_error(&mut self, message: &str);
}
