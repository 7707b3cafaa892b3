//! FLTK widgets and dialogs. Everything here sends `Message`s; the
//! application state decides what they mean.

pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod tab_bar;
pub mod theme;
