use fltk::dialog::{self, FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::infrastructure::dialogs::{Dialogs, SaveChoice};

/// Native chooser filter: text files first, everything else second.
/// FLTK format: "Description\tPattern\nDescription2\tPattern2"
pub fn text_files_filter() -> String {
    ["Text Files\t*.txt", "All Files\t*"].join("\n")
}

fn native_dialog(save: bool, title: &str) -> Option<String> {
    let kind = if save { FileDialogType::BrowseSaveFile } else { FileDialogType::BrowseFile };
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(&text_files_filter());
    if save {
        nfc.set_option(FileDialogOptions::SaveAsConfirm);
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// Blocking FLTK dialogs backing the tab controller.
#[derive(Debug, Default)]
pub struct FltkDialogs;

impl Dialogs for FltkDialogs {
    fn pick_open_path(&mut self) -> Option<String> {
        native_dialog(false, "Open")
    }

    fn pick_save_path(&mut self) -> Option<String> {
        native_dialog(true, "Save As")
    }

    fn confirm_save(&mut self, name: &str) -> SaveChoice {
        let choice = dialog::choice2_default(
            &format!("Save changes to \"{}\"?", name),
            "Save",
            "Don't Save",
            "Cancel",
        );
        match choice {
            Some(0) => SaveChoice::Save,
            Some(1) => SaveChoice::Discard,
            _ => SaveChoice::Cancel,
        }
    }

    fn report_error(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}
