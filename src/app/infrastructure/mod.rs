//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK text buffers as tab content
//! - The dialog port used by the tab controller
//! - Error types

pub mod buffer;
pub mod dialogs;
pub mod error;
