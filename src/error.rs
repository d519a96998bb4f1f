//! Error types for the Stagehand editor
//!
//! Interactive input never produces an error: invalid transitions and
//! operations on an empty scene are ignored. The variants here cover wiring
//! bugs (unknown uniforms, unknown shapes) and GPU bootstrap failures.

use thiserror::Error;

/// Errors raised by a [`ShaderProgram`](crate::gfx::rendering::ShaderProgram)
/// when a uniform is set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShaderError {
    /// The named shader variable was never registered with the program.
    #[error("nonexistent shader variable '{0}'")]
    UnknownUniform(String),

    /// The variable exists but holds a different kind of value.
    #[error("shader variable '{name}' expects a {expected} value")]
    UniformType {
        name: String,
        expected: &'static str,
    },
}

/// Errors raised while editing the scene graph itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// A menu entry or id does not name a primitive in the shape library.
    #[error("unknown shape id {0}")]
    UnknownShape(u32),
}

/// Errors raised by the wgpu render engine.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create render surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to request a graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to request a graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("failed to acquire the next surface texture: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("render pipeline '{0}' is not available")]
    MissingPipeline(String),

    #[error(transparent)]
    Shader(#[from] ShaderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_culprit() {
        let err = ShaderError::UnknownUniform("shininess".to_string());
        assert_eq!(err.to_string(), "nonexistent shader variable 'shininess'");

        let err = SceneError::UnknownShape(12);
        assert_eq!(err.to_string(), "unknown shape id 12");
    }

    #[test]
    fn test_shader_error_converts_into_render_error() {
        let err: RenderError = ShaderError::UnknownUniform("time".to_string()).into();
        assert!(matches!(err, RenderError::Shader(ShaderError::UnknownUniform(_))));
    }
}
