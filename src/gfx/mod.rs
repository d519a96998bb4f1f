//! # Graphics Module
//!
//! Everything between the edit state and the screen.
//!
//! - **Geometry** ([`geometry`]) - value types and procedural primitives
//! - **Camera** ([`camera`]) - view and projection transforms
//! - **Scene** ([`scene`]) - meshes, rigid bodies, the model stack and the scene context
//! - **Resources** ([`resources`]) - Phong materials, the light and the depth buffer
//! - **Rendering** ([`rendering`]) - the shader program seam and the wgpu render engine
//!
//! Scene code never touches wgpu directly. It sets uniforms and issues draws
//! through [`rendering::ShaderProgram`], which lets it run without a GPU.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use rendering::RenderEngine;
pub use scene::Scene;
