use super::document::DocumentId;

/// Editing commands handled entirely by the editor widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Delete,
    SelectAll,
}

/// All messages that can be sent through the FLTK channel.
/// Menu items, the tab bar, the editor and the window each send one of
/// these; `TabStripController::handle` maps them onto operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Edit
    Edit(EditCommand),

    // View
    ZoomIn,
    ZoomOut,
    /// Ctrl+wheel; positive zooms in.
    ZoomWheel(i32),

    // Tabs
    TabStripClick { x: i32, y: i32 },
    TabClose(DocumentId),
    TabCloseActive,
    TabNext,
    TabPrevious,

    BufferModified(DocumentId),
    FilesDropped(Vec<String>),

    // Help
    ShowHelp,
}
