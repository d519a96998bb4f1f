//! # User Interface Module
//!
//! Dear ImGui overlay drawn on top of the viewport.
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu
//! - [`editor_panel`] - status readout, "Add shape" menu and key reference
//!
//! Pointer and key events go to ImGui first. The editor only sees the ones
//! ImGui does not keep, so clicking a menu button never starts an edit.

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::editor_panel;
