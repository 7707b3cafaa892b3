use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::{EditCommand, Message};

/// One static menu entry: path, accelerator, message sent when chosen.
pub struct MenuCommand {
    pub path: &'static str,
    pub shortcut: Shortcut,
    pub message: Message,
    pub flag: MenuFlag,
}

fn entry(path: &'static str, shortcut: Shortcut, message: Message) -> MenuCommand {
    MenuCommand { path, shortcut, message, flag: MenuFlag::Normal }
}

/// Accelerator-only entry: hidden from the menu, shortcut still active.
fn alias(path: &'static str, shortcut: Shortcut, message: Message) -> MenuCommand {
    MenuCommand { path, shortcut, message, flag: MenuFlag::Invisible }
}

fn keypad(c: char) -> Key {
    Key::from_i32(Key::KP.bits() + c as i32)
}

pub fn menu_commands() -> Vec<MenuCommand> {
    vec![
        // File
        entry("File/New", Shortcut::Ctrl | 'n', Message::FileNew),
        entry("File/Open...", Shortcut::Ctrl | 'o', Message::FileOpen),
        entry("File/Save", Shortcut::Ctrl | 's', Message::FileSave),
        entry("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', Message::FileSaveAs),
        entry("File/Close Tab", Shortcut::Ctrl | 'w', Message::TabCloseActive),
        entry("File/Next Tab", Shortcut::Ctrl | Key::Tab, Message::TabNext),
        entry("File/Previous Tab", Shortcut::Ctrl | Shortcut::Shift | Key::Tab, Message::TabPrevious),
        entry("File/Exit", Shortcut::Ctrl | 'q', Message::FileQuit),
        // Edit
        entry("Edit/Undo", Shortcut::Ctrl | 'z', Message::Edit(EditCommand::Undo)),
        entry("Edit/Redo", Shortcut::Ctrl | Shortcut::Shift | 'z', Message::Edit(EditCommand::Redo)),
        entry("Edit/Cut", Shortcut::Ctrl | 'x', Message::Edit(EditCommand::Cut)),
        entry("Edit/Copy", Shortcut::Ctrl | 'c', Message::Edit(EditCommand::Copy)),
        entry("Edit/Paste", Shortcut::Ctrl | 'v', Message::Edit(EditCommand::Paste)),
        entry("Edit/Delete", Shortcut::None, Message::Edit(EditCommand::Delete)),
        entry("Edit/Select All", Shortcut::Ctrl | 'a', Message::Edit(EditCommand::SelectAll)),
        // View
        entry("View/Zoom In", Shortcut::Ctrl | '=', Message::ZoomIn),
        entry("View/Zoom Out", Shortcut::Ctrl | '-', Message::ZoomOut),
        alias("View/Zoom In (+)", Shortcut::Ctrl | '+', Message::ZoomIn),
        alias("View/Zoom In (keypad)", Shortcut::Ctrl | keypad('+'), Message::ZoomIn),
        alias("View/Zoom Out (keypad)", Shortcut::Ctrl | keypad('-'), Message::ZoomOut),
        // Help
        entry("Help/Help Contents", Shortcut::None, Message::ShowHelp),
    ]
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    for cmd in menu_commands() {
        let s = *sender;
        let msg = cmd.message;
        menu.add(cmd.path, cmd.shortcut, cmd.flag, move |_| s.send(msg.clone()));
    }
}
