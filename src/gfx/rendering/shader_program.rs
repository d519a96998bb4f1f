//! # Shader Program Seam
//!
//! Scene code talks to the GPU through [`ShaderProgram`]: set named uniforms,
//! then draw a mesh with whatever values are current. [`DrawRecorder`] is the
//! implementation used every frame. It snapshots the uniform state at each
//! draw into a [`DrawCall`] list that the render engine replays with wgpu.
//!
//! Setting a uniform that the program does not declare is a wiring bug and
//! is reported as [`ShaderError::UnknownUniform`].

use std::rc::Rc;

use cgmath::Matrix4;

use crate::error::ShaderError;
use crate::gfx::camera::OPENGL_TO_WGPU_MATRIX;
use crate::gfx::geometry::Vector;
use crate::gfx::scene::Mesh;

/// Names of the variables declared by the scene shader
pub mod uniforms {
    pub const TIME: &str = "time";
    pub const MODEL: &str = "model";
    pub const VIEW: &str = "view";
    pub const PROJECTION: &str = "projection";
    pub const EYE_POSITION: &str = "eyePosition";
    pub const SHININESS: &str = "shininess";
    pub const LIGHT_POSITION: &str = "lightPosition";
    pub const AMBIENT_PRODUCT: &str = "ambientProduct";
    pub const DIFFUSE_PRODUCT: &str = "diffuseProduct";
    pub const SPECULAR_PRODUCT: &str = "specularProduct";

    pub const ALL: [&str; 10] = [
        TIME,
        MODEL,
        VIEW,
        PROJECTION,
        EYE_POSITION,
        SHININESS,
        LIGHT_POSITION,
        AMBIENT_PRODUCT,
        DIFFUSE_PRODUCT,
        SPECULAR_PRODUCT,
    ];
}

/// Uniform-set and mesh-draw primitives of a shader program
pub trait ShaderProgram {
    fn set_uniform_float(&mut self, name: &str, value: f32) -> Result<(), ShaderError>;

    fn set_uniform_vec3(&mut self, name: &str, value: Vector) -> Result<(), ShaderError>;

    fn set_uniform_mat4(&mut self, name: &str, value: Matrix4<f32>) -> Result<(), ShaderError>;

    /// Draws `mesh` with the uniform values set so far
    fn draw_mesh(&mut self, mesh: &Rc<Mesh>) -> Result<(), ShaderError>;
}

/// Uniform block of the scene shader
///
/// MUST match the `Uniforms` struct in `scene.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    /// Already converted to wgpu clip space
    pub projection: [[f32; 4]; 4],
    pub eye_position: [f32; 4],
    pub light_position: [f32; 4],
    pub ambient_product: [f32; 4],
    pub diffuse_product: [f32; 4],
    pub specular_product: [f32; 4],
    pub shininess: f32,
    /// Milliseconds since start-up
    pub time: f32,
    _padding: [f32; 2],
}
// Total: 3 * 64 + 5 * 16 + 16 = 288 bytes

impl Default for DrawUniforms {
    fn default() -> Self {
        let identity: [[f32; 4]; 4] = Matrix4::from_scale(1.0).into();
        Self {
            model: identity,
            view: identity,
            projection: identity,
            eye_position: [0.0, 0.0, 0.0, 1.0],
            light_position: [0.0, 0.0, 0.0, 1.0],
            ambient_product: [0.0, 0.0, 0.0, 1.0],
            diffuse_product: [0.0, 0.0, 0.0, 1.0],
            specular_product: [0.0, 0.0, 0.0, 1.0],
            shininess: 1.0,
            time: 0.0,
            _padding: [0.0; 2],
        }
    }
}

/// One recorded draw: the mesh and the uniform values at draw time
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub mesh: Rc<Mesh>,
    pub uniforms: DrawUniforms,
}

/// In-memory [`ShaderProgram`] collecting draw calls for one frame
#[derive(Debug, Default)]
pub struct DrawRecorder {
    current: DrawUniforms,
    calls: Vec<DrawCall>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uniform values that the next draw would use
    pub fn current(&self) -> &DrawUniforms {
        &self.current
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Hands over the recorded calls, keeping the uniform state
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    fn mismatch(name: &str, expected: &'static str) -> ShaderError {
        if uniforms::ALL.contains(&name) {
            ShaderError::UniformType {
                name: name.to_string(),
                expected,
            }
        } else {
            ShaderError::UnknownUniform(name.to_string())
        }
    }
}

fn homogeneous(value: Vector, w: f32) -> [f32; 4] {
    [value.x, value.y, value.z, w]
}

impl ShaderProgram for DrawRecorder {
    fn set_uniform_float(&mut self, name: &str, value: f32) -> Result<(), ShaderError> {
        match name {
            uniforms::TIME => self.current.time = value,
            uniforms::SHININESS => self.current.shininess = value,
            _ => return Err(Self::mismatch(name, "float")),
        }
        Ok(())
    }

    fn set_uniform_vec3(&mut self, name: &str, value: Vector) -> Result<(), ShaderError> {
        match name {
            uniforms::EYE_POSITION => self.current.eye_position = homogeneous(value, 1.0),
            uniforms::LIGHT_POSITION => self.current.light_position = homogeneous(value, 1.0),
            uniforms::AMBIENT_PRODUCT => self.current.ambient_product = homogeneous(value, 1.0),
            uniforms::DIFFUSE_PRODUCT => self.current.diffuse_product = homogeneous(value, 1.0),
            uniforms::SPECULAR_PRODUCT => {
                self.current.specular_product = homogeneous(value, 1.0)
            }
            _ => return Err(Self::mismatch(name, "vec3")),
        }
        Ok(())
    }

    fn set_uniform_mat4(&mut self, name: &str, value: Matrix4<f32>) -> Result<(), ShaderError> {
        match name {
            uniforms::MODEL => self.current.model = value.into(),
            uniforms::VIEW => self.current.view = value.into(),
            uniforms::PROJECTION => {
                self.current.projection = (OPENGL_TO_WGPU_MATRIX * value).into()
            }
            _ => return Err(Self::mismatch(name, "mat4")),
        }
        Ok(())
    }

    fn draw_mesh(&mut self, mesh: &Rc<Mesh>) -> Result<(), ShaderError> {
        self.calls.push(DrawCall {
            mesh: Rc::clone(mesh),
            uniforms: self.current,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{generate_cube, Dimension};

    #[test]
    fn test_uniform_block_size() {
        assert_eq!(std::mem::size_of::<DrawUniforms>(), 288);
    }

    #[test]
    fn test_unknown_uniform_is_reported() {
        let mut recorder = DrawRecorder::new();
        assert_eq!(
            recorder.set_uniform_float("gamma", 2.2),
            Err(ShaderError::UnknownUniform("gamma".to_string()))
        );
        assert_eq!(
            recorder.set_uniform_float(uniforms::MODEL, 1.0),
            Err(ShaderError::UniformType {
                name: "model".to_string(),
                expected: "float"
            })
        );
    }

    #[test]
    fn test_draw_snapshots_current_uniforms() {
        let mesh = Rc::new(Mesh::from_geometry(&generate_cube(Dimension::UNIT, None)));
        let mut recorder = DrawRecorder::new();

        recorder.set_uniform_float(uniforms::TIME, 16.0).unwrap();
        recorder.draw_mesh(&mesh).unwrap();
        recorder.set_uniform_float(uniforms::TIME, 32.0).unwrap();
        recorder.draw_mesh(&mesh).unwrap();

        let calls = recorder.take_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].uniforms.time, 16.0);
        assert_eq!(calls[1].uniforms.time, 32.0);
        assert!(Rc::ptr_eq(&calls[0].mesh, &mesh));
        assert!(recorder.calls().is_empty());
        assert_eq!(recorder.current().time, 32.0);
    }
}
