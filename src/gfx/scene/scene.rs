use log::debug;

use super::{
    model::ModelStack,
    rigid_body::RigidBody,
    shapes::{ShapeKind, ShapeLibrary},
};
use crate::error::{SceneError, ShaderError};
use crate::gfx::{
    camera::{Projection, View},
    geometry::{Point, Vector},
    rendering::shader_program::{uniforms, ShaderProgram},
    resources::material::Light,
};

/// Everything the editor draws: bodies, camera, projection and light
///
/// The body list is owned here; the editor selects and mutates bodies
/// through `bodies_mut`.
pub struct Scene {
    bodies: Vec<RigidBody>,
    pub model: ModelStack,
    pub view: View,
    pub projection: Projection,
    pub light: Light,
    shapes: ShapeLibrary,
}

impl Scene {
    /// Creates an empty scene for a viewport with the given aspect ratio
    pub fn new(aspect: f32) -> Self {
        Self {
            bodies: Vec::new(),
            model: ModelStack::new(),
            view: View::default(),
            projection: Projection::new(aspect),
            light: Light::default(),
            shapes: ShapeLibrary::new(),
        }
    }

    /// Start-up scene: a wide ground plane under a cube
    pub fn with_default_bodies(aspect: f32) -> Self {
        let mut scene = Self::new(aspect);

        let plane = scene.add_shape(ShapeKind::Plane);
        scene.bodies[plane].set_scale(Vector::new(10.0, 1.0, 10.0));
        scene.bodies[plane].set_position(Point::new(0.0, -0.5, 0.0));
        scene.add_shape(ShapeKind::Cube);

        scene
    }

    /// Appends a default-transformed body of `kind` and returns its index
    pub fn add_shape(&mut self, kind: ShapeKind) -> usize {
        let mesh = self.shapes.mesh(kind);
        self.bodies.push(RigidBody::new(mesh));
        debug!("added {} as body {}", kind, self.bodies.len() - 1);
        self.bodies.len() - 1
    }

    /// Like [`add_shape`](Self::add_shape), by menu id
    pub fn add_shape_by_id(&mut self, id: u32) -> Result<usize, SceneError> {
        let kind = ShapeKind::try_from(id)?;
        Ok(self.add_shape(kind))
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut Vec<RigidBody> {
        &mut self.bodies
    }

    /// Sets the per-frame uniforms and draws every body
    ///
    /// The light sits at the eye. Any uniform the program rejects aborts the
    /// frame.
    pub fn render<P>(&mut self, program: &mut P, elapsed_ms: f32) -> Result<(), ShaderError>
    where
        P: ShaderProgram + ?Sized,
    {
        let eye = self.view.position();

        program.set_uniform_float(uniforms::TIME, elapsed_ms)?;
        program.set_uniform_mat4(uniforms::VIEW, self.view.matrix())?;
        program.set_uniform_mat4(uniforms::PROJECTION, self.projection.matrix())?;
        program.set_uniform_vec3(uniforms::EYE_POSITION, eye)?;
        program.set_uniform_vec3(uniforms::LIGHT_POSITION, eye)?;

        for body in &self.bodies {
            body.draw(&mut self.model, &self.light, program)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Selectable;
    use crate::gfx::rendering::shader_program::DrawRecorder;
    use crate::gfx::resources::material::Material;
    use std::rc::Rc;

    #[test]
    fn test_default_scene_layout() {
        let scene = Scene::with_default_bodies(16.0 / 9.0);
        assert_eq!(scene.bodies().len(), 2);

        let plane = &scene.bodies()[0];
        assert_eq!(plane.position(), Point::new(0.0, -0.5, 0.0));
        assert_eq!(plane.scale(), Vector::new(10.0, 1.0, 10.0));
        assert_eq!(scene.bodies()[1].position(), Point::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_add_shape_reuses_meshes() {
        let mut scene = Scene::new(1.0);
        let a = scene.add_shape(ShapeKind::Torus);
        let b = scene.add_shape_by_id(ShapeKind::Torus.id()).unwrap();

        assert_eq!((a, b), (0, 1));
        assert!(Rc::ptr_eq(scene.bodies()[0].mesh(), scene.bodies()[1].mesh()));
        assert_eq!(scene.add_shape_by_id(42), Err(SceneError::UnknownShape(42)));
        assert_eq!(scene.bodies().len(), 2);
    }

    #[test]
    fn test_render_draws_every_body_with_its_material() {
        let mut scene = Scene::with_default_bodies(1.0);
        scene.bodies_mut()[1].set_selected(true);

        let mut recorder = DrawRecorder::new();
        scene.render(&mut recorder, 250.0).unwrap();

        let calls = recorder.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|call| call.uniforms.time == 250.0));

        let eye = scene.view.position();
        assert_eq!(calls[0].uniforms.light_position, [eye.x, eye.y, eye.z, 1.0]);

        let selected = Light::default().products(&Material::SELECTED);
        assert_eq!(calls[0].uniforms.shininess, Material::DEFAULT.shininess);
        assert_eq!(calls[1].uniforms.diffuse_product[..3], Into::<[f32; 3]>::into(selected.diffuse));
        assert_eq!(scene.model.depth(), 1);
    }

    struct RejectingProgram;

    impl ShaderProgram for RejectingProgram {
        fn set_uniform_float(&mut self, name: &str, _: f32) -> Result<(), ShaderError> {
            Err(ShaderError::UnknownUniform(name.to_string()))
        }
        fn set_uniform_vec3(&mut self, name: &str, _: Vector) -> Result<(), ShaderError> {
            Err(ShaderError::UnknownUniform(name.to_string()))
        }
        fn set_uniform_mat4(
            &mut self,
            name: &str,
            _: cgmath::Matrix4<f32>,
        ) -> Result<(), ShaderError> {
            Err(ShaderError::UnknownUniform(name.to_string()))
        }
        fn draw_mesh(&mut self, _: &Rc<crate::gfx::scene::Mesh>) -> Result<(), ShaderError> {
            Ok(())
        }
    }

    #[test]
    fn test_missing_uniform_aborts_render() {
        let mut scene = Scene::with_default_bodies(1.0);
        let err = scene.render(&mut RejectingProgram, 0.0).unwrap_err();
        assert_eq!(err, ShaderError::UnknownUniform("time".to_string()));
    }
}
