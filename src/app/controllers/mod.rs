//! Controllers layer - orchestration and coordination.
//!
//! - Document registry (ordered tabs, one document each)
//! - Tab strip controller (file operations, close/exit prompts, zoom,
//!   message dispatch)
//! - Tab strip geometry and hit-testing

pub mod chrome;
pub mod registry;
pub mod tabs;
