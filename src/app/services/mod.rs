//! Services layer - business operations and utilities.
//!
//! This module contains operations with no UI state of their own:
//! - Whole-file text I/O
//! - Help file lookup
//! - Path and drop-payload helpers

pub mod file_io;
pub mod help;
pub mod text_ops;
