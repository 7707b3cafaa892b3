//! TabPad: a small multi-tab plain-text editor.
//!
//! `app` holds the toolkit-independent tab/document logic plus the state
//! that wires it to FLTK; `ui` holds the widgets.

pub mod app;
pub mod ui;
