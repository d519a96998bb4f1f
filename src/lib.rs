// src/lib.rs
//! Stagehand scene editor
//!
//! An interactive editor for scenes made of primitive solids, built on wgpu
//! and winit. Bodies are selected with the keyboard and moved, scaled or
//! rotated by dragging the mouse, optionally constrained to one axis.

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod gfx;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::StagehandApp;
pub use config::EditorConfig;

/// Creates an editor configured from the environment
pub fn default() -> anyhow::Result<StagehandApp> {
    StagehandApp::new(EditorConfig::from_env())
}
