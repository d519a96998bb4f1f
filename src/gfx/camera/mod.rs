//! # Camera
//!
//! The [`View`] places the eye in the world and the [`Projection`] maps camera
//! space to clip space. Both produce OpenGL-convention matrices;
//! [`OPENGL_TO_WGPU_MATRIX`] converts clip depth to wgpu's `0..1` range when
//! the matrices are uploaded.

pub mod projection;
pub mod view;

pub use projection::Projection;
pub use view::View;

use cgmath::Matrix4;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);
