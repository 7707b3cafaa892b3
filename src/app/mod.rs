//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Zoom, Messages, Settings)
//! - `controllers/` - Orchestration (DocumentRegistry, TabStripController)
//! - `services/` - File I/O, help lookup, path helpers
//! - `infrastructure/` - External integrations (FLTK buffer, dialog port, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::chrome::TabChrome;
pub use controllers::registry::{DocumentRegistry, Tab};
pub use controllers::tabs::{Outcome, TabStripController, UNTITLED_TITLE};
pub use domain::{AppSettings, Document, DocumentId, EditCommand, Message, Point, Rect, TextContent, Zoom};
pub use infrastructure::dialogs::{Dialogs, SaveChoice};
pub use infrastructure::error::AppError;
