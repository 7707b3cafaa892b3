use fltk::{
    app::{self, MouseWheel, Sender},
    enums::{Event, Shortcut},
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::tab_bar::{TAB_BAR_HEIGHT, TabBar};
use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;
use crate::app::services::text_ops::parse_dropped_paths;

pub const APP_NAME: &str = "TabPad";
const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub tab_bar: TabBar,
    pub text_editor: TextEditor,
}

/// Window with a menu bar, the tab strip and a single editor area stacked
/// top to bottom.
pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, APP_NAME);
    wind.set_xclass(APP_NAME);

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let tab_bar = TabBar::new(0, MENU_HEIGHT, w, *sender);
    flex.fixed(&tab_bar.widget, TAB_BAR_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    if settings.word_wrap {
        text_editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    install_zoom_wheel(&mut text_editor, *sender);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    install_file_drop(&mut wind, *sender);

    // Closing the window goes through the same prompts as File/Exit
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        tab_bar,
        text_editor,
    }
}

/// Ctrl+wheel over the editor zooms; everything else falls through to the
/// editor's own handling.
fn install_zoom_wheel(editor: &mut TextEditor, sender: Sender<Message>) {
    editor.handle(move |_, event| match event {
        Event::MouseWheel if app::event_state().contains(Shortcut::Ctrl) => {
            let notches = match app::event_dy() {
                MouseWheel::Up => 1,
                MouseWheel::Down => -1,
                _ => 0,
            };
            if notches != 0 {
                sender.send(Message::ZoomWheel(notches));
            }
            true
        }
        _ => false,
    });
}

/// Files dropped anywhere on the window, whether or not the editor is active.
fn install_file_drop(wind: &mut Window, sender: Sender<Message>) {
    let mut tracker = DropTracker::default();
    wind.handle(move |_, event| match tracker.on_event(event, app::event_text) {
        DropEvent::Ignored => false,
        DropEvent::Consumed => true,
        DropEvent::Dropped(paths) => {
            sender.send(Message::FilesDropped(paths));
            true
        }
    });
}

#[derive(Debug, PartialEq)]
pub enum DropEvent {
    Ignored,
    Consumed,
    Dropped(Vec<String>),
}

/// FLTK delivers a drop as `DndRelease` followed by a `Paste` carrying the
/// payload. Only a paste that follows a release is a drop.
#[derive(Debug, Default)]
pub struct DropTracker {
    pending: bool,
}

impl DropTracker {
    pub fn on_event<F>(&mut self, event: Event, payload: F) -> DropEvent
    where
        F: FnOnce() -> String,
    {
        match event {
            Event::DndEnter | Event::DndDrag | Event::DndLeave => DropEvent::Consumed,
            Event::DndRelease => {
                self.pending = true;
                DropEvent::Consumed
            }
            Event::Paste if self.pending => {
                self.pending = false;
                let paths = parse_dropped_paths(&payload());
                if paths.is_empty() {
                    DropEvent::Consumed
                } else {
                    DropEvent::Dropped(paths)
                }
            }
            _ => DropEvent::Ignored,
        }
    }
}
