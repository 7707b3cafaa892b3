use std::collections::HashSet;

use fltk::{
    app::Sender,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::controllers::tabs::{Outcome, TabStripController, UNTITLED_TITLE};
use super::domain::document::DocumentId;
use super::domain::messages::{EditCommand, Message};
use super::domain::settings::AppSettings;
use crate::ui::file_dialogs::FltkDialogs;
use crate::ui::main_window::{APP_NAME, MainWidgets};
use crate::ui::menu::build_menu;
use crate::ui::tab_bar::{TAB_BAR_HEIGHT, TabBar, measure_title};
use crate::ui::theme::apply_theme;

/// Glue between the FLTK widgets and the tab controller.
///
/// Messages are handled by the controller first; afterwards the widgets are
/// brought back in line with whatever the controller now holds.
pub struct AppState {
    pub controller: TabStripController<TextBuffer>,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub tab_bar: TabBar,
    pub sender: Sender<Message>,
    pub settings: AppSettings,
    dialogs: FltkDialogs,
    bound: BoundBuffer<TextBuffer>,
    /// Buffers that already report modifications.
    watched: HashSet<DocumentId>,
    /// Shown while no tab is open.
    blank: TextBuffer,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, settings: AppSettings) -> Self {
        let MainWidgets {
            wind: mut window,
            mut menu,
            tab_bar,
            text_editor: mut editor,
            ..
        } = widgets;

        build_menu(&mut menu, &sender);
        apply_theme(&mut editor, &mut window, &mut menu, settings.dark_mode);

        let mut controller = TabStripController::new();
        controller.set_keep_tab_on_failed_save(settings.keep_tab_on_failed_save);
        controller.open_new_tab(UNTITLED_TITLE);

        let mut state = Self {
            controller,
            editor,
            window,
            menu,
            tab_bar,
            sender,
            settings,
            dialogs: FltkDialogs,
            bound: BoundBuffer::default(),
            watched: HashSet::new(),
            blank: TextBuffer::default(),
        };
        state.sync_widgets();
        state
    }

    /// Handle one message. Returns true when the application should quit.
    pub fn dispatch(&mut self, msg: Message) -> bool {
        log::trace!("Dispatching {:?}", msg);
        self.remember_cursor();

        let outcome = self.controller.handle(msg, &mut self.dialogs);
        match outcome {
            Outcome::Quit => return true,
            Outcome::Edit(cmd) => self.apply_edit(cmd),
            Outcome::Continue => {}
        }

        self.sync_widgets();
        false
    }

    fn remember_cursor(&mut self) {
        let pos = self.editor.insert_position();
        if let Some(id) = self.bound.id
            && let Some(tab) = self.controller.registry_mut().get_mut(id)
        {
            tab.cursor_position = pos;
        }
    }

    fn apply_edit(&mut self, cmd: EditCommand) {
        match cmd {
            EditCommand::Undo => {
                self.editor.undo();
            }
            EditCommand::Redo => {
                self.editor.redo();
            }
            EditCommand::Cut => {
                self.editor.cut();
            }
            EditCommand::Copy => {
                self.editor.copy();
            }
            EditCommand::Paste => {
                self.editor.paste();
            }
            EditCommand::Delete => {
                if let Some(mut buf) = self.editor.buffer() {
                    buf.remove_selection();
                }
            }
            EditCommand::SelectAll => {
                if let Some(mut buf) = self.editor.buffer() {
                    let len = buf.length();
                    buf.select(0, len);
                }
            }
        }
    }

    // --- Widget sync ---

    fn sync_widgets(&mut self) {
        self.watch_buffers();
        self.bind_active_buffer();
        self.apply_zoom();
        self.rebuild_tab_bar();
        self.update_window_title();
    }

    /// Hook a modify callback onto every buffer not seen before, and forget
    /// tabs that are gone.
    fn watch_buffers(&mut self) {
        let ids = self.controller.registry().ids();
        self.watched.retain(|id| ids.contains(id));

        for id in ids {
            if self.watched.contains(&id) {
                continue;
            }
            let Some(tab) = self.controller.registry_mut().get_mut(id) else {
                continue;
            };
            let sender = self.sender;
            tab.content.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
                if inserted > 0 || deleted > 0 {
                    sender.send(Message::BufferModified(id));
                }
            });
            self.watched.insert(id);
        }
    }

    fn bind_active_buffer(&mut self) {
        let active_id = self.controller.registry().active_id();
        if self.bound.is_bound_to(active_id) {
            return;
        }

        let (buffer, cursor) = match self.controller.registry().active() {
            Some(tab) => (tab.content.clone(), Some(tab.cursor_position)),
            None => (self.blank.clone(), None),
        };
        self.editor.set_buffer(buffer.clone());
        let previous = self.bound.replace(active_id, buffer);

        match cursor {
            Some(pos) => {
                self.editor.set_insert_position(pos);
                self.editor.show_insert_position();
                self.editor.activate();
                let _ = self.editor.take_focus();
            }
            None => self.editor.deactivate(),
        }
        self.editor.redraw();
        drop(previous);
    }

    fn apply_zoom(&mut self) {
        let Some(tab) = self.controller.registry().active() else {
            return;
        };
        let size = tab.zoom.text_size(self.settings.font_size);
        if self.editor.text_size() != size {
            self.editor.set_text_size(size);
            self.editor.redraw();
        }
    }

    fn rebuild_tab_bar(&mut self) {
        let origin = self.tab_bar.layout_origin();
        self.controller.relayout(origin, TAB_BAR_HEIGHT, measure_title);
        let chromes = self.controller.tab_chromes();
        self.tab_bar.rebuild(chromes, self.settings.dark_mode);
    }

    fn update_window_title(&mut self) {
        let label = match self.controller.registry().active() {
            Some(tab) => format!("{} - {}", tab.title(), APP_NAME),
            None => APP_NAME.to_string(),
        };
        self.window.set_label(&label);
    }
}

/// Handle on the buffer the editor displays.
///
/// `TextEditor::set_buffer` keeps no reference of its own, so this is what
/// keeps a closed tab's buffer alive until the editor has moved to another.
struct BoundBuffer<B> {
    id: Option<DocumentId>,
    buffer: Option<B>,
}

impl<B> Default for BoundBuffer<B> {
    fn default() -> Self {
        Self { id: None, buffer: None }
    }
}

impl<B> BoundBuffer<B> {
    fn is_bound_to(&self, id: Option<DocumentId>) -> bool {
        self.buffer.is_some() && self.id == id
    }

    /// Returns the buffer bound before, to be dropped once the editor shows
    /// the new one.
    fn replace(&mut self, id: Option<DocumentId>, buffer: B) -> Option<B> {
        self.id = id;
        self.buffer.replace(buffer)
    }
}
