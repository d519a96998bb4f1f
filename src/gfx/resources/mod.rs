// src/gfx/resources/mod.rs
//! GPU-facing resources
//!
//! Phong material presets and the depth buffer.

pub mod material;
pub mod texture_resource;

// Re-export main types
pub use material::{Light, LightingProducts, Material};
pub use texture_resource::TextureResource;
