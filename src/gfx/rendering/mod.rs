// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! The scene records uniforms and draws through the [`ShaderProgram`] seam;
//! the [`RenderEngine`] replays the recorded [`DrawCall`]s with wgpu.

pub mod pipeline_manager;
pub mod render_engine;
pub mod shader_program;

// Re-export main types
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::{RenderEngine, SCENE_PIPELINE};
pub use shader_program::{uniforms, DrawCall, DrawRecorder, DrawUniforms, ShaderProgram};
