//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document, DocumentId and the modified-marker title rule
//! - Tab content and zoom
//! - Geometry for the tab strip
//! - Application settings
//! - Message types for the event system

pub mod content;
pub mod document;
pub mod geometry;
pub mod messages;
pub mod settings;
pub mod zoom;

pub use content::TextContent;
pub use document::{Document, DocumentId, MODIFIED_MARKER};
pub use geometry::{Point, Rect};
pub use messages::{EditCommand, Message};
pub use settings::AppSettings;
pub use zoom::Zoom;
