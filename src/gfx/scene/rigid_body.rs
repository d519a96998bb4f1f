//! # Rigid Bodies
//!
//! A [`RigidBody`] places a shared [`Mesh`] in the world. Position, scale and
//! angles are edited incrementally while the user drags, so the `move_by`,
//! `scale_by` and `rotate_by` mutators add their delta to the stored value.
//! Absolute setters exist for restoring a snapshot.

use std::rc::Rc;

use cgmath::Deg;

use super::{mesh::Mesh, model::ModelStack};
use crate::editor::Selectable;
use crate::error::ShaderError;
use crate::gfx::geometry::{Dimension, Point, Vector};
use crate::gfx::rendering::shader_program::{uniforms, ShaderProgram};
use crate::gfx::resources::material::{Light, Material};

/// Position, scale and angles of a body, as saved for a revert
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSnapshot {
    pub position: Point,
    pub scale: Vector,
    pub angles: Vector,
}

/// A positioned, scaled and rotated shape instance
///
/// Cloning yields an independent transform that shares the same mesh.
#[derive(Debug, Clone)]
pub struct RigidBody {
    mesh: Rc<Mesh>,
    dimensions: Dimension,
    position: Point,
    scale: Vector,
    /// Degrees about Y, Z and X, applied in that order
    angles: Vector,
    selected: bool,
}

impl RigidBody {
    /// Body at the origin with unit scale, sized like its mesh
    pub fn new(mesh: Rc<Mesh>) -> Self {
        Self {
            dimensions: mesh.dimensions(),
            mesh,
            position: Point::new(0.0, 0.0, 0.0),
            scale: Vector::new(1.0, 1.0, 1.0),
            angles: Vector::new(0.0, 0.0, 0.0),
            selected: false,
        }
    }

    pub fn mesh(&self) -> &Rc<Mesh> {
        &self.mesh
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn scale(&self) -> Vector {
        self.scale
    }

    pub fn angles(&self) -> Vector {
        self.angles
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Effective extents: authored dimensions times scale, per component
    pub fn dimensions(&self) -> Dimension {
        self.dimensions.scaled(self.scale)
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_scale(&mut self, scale: Vector) {
        self.scale = scale;
    }

    pub fn set_angles(&mut self, angles: Vector) {
        self.angles = angles;
    }

    pub fn move_by(&mut self, delta: Vector) {
        self.position += delta;
    }

    pub fn scale_by(&mut self, delta: Vector) {
        self.scale += delta;
    }

    pub fn rotate_by(&mut self, delta: Vector) {
        self.angles += delta;
    }

    pub fn snapshot(&self) -> TransformSnapshot {
        TransformSnapshot {
            position: self.position,
            scale: self.scale,
            angles: self.angles,
        }
    }

    /// Restores position, scale and angles; mesh and selection are untouched
    pub fn restore(&mut self, snapshot: &TransformSnapshot) {
        self.position = snapshot.position;
        self.scale = snapshot.scale;
        self.angles = snapshot.angles;
    }

    /// Axis-aligned bounding box overlap
    ///
    /// Touching boxes count as colliding.
    pub fn is_colliding(&self, other: &RigidBody) -> bool {
        let (a, b) = (self.dimensions(), other.dimensions());
        let gap = self.position - other.position;

        gap.x.abs() <= (a.width + b.width) / 2.0
            && gap.y.abs() <= (a.height + b.height) / 2.0
            && gap.z.abs() <= (a.depth + b.depth) / 2.0
    }

    /// Sets the material uniforms, then draws the mesh in its own model frame
    pub fn draw<P>(
        &self,
        model: &mut ModelStack,
        light: &Light,
        program: &mut P,
    ) -> Result<(), ShaderError>
    where
        P: ShaderProgram + ?Sized,
    {
        Material::for_selection(self.selected).apply(light, program)?;

        let mut frame = model.push();
        frame.translate(self.position);
        frame.scale(self.scale);
        frame.rotate(Deg(self.angles.x), Vector::unit_y());
        frame.rotate(Deg(self.angles.y), Vector::unit_z());
        frame.rotate(Deg(self.angles.z), Vector::unit_x());

        program.set_uniform_mat4(uniforms::MODEL, frame.matrix())?;
        program.draw_mesh(&self.mesh)
    }
}

impl Selectable for RigidBody {
    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{generate_cube, Color};
    use crate::gfx::rendering::shader_program::DrawRecorder;
    use cgmath::{Matrix4, SquareMatrix};

    fn unit_cube() -> RigidBody {
        let data = generate_cube(Dimension::UNIT, Some(Color::WHITE));
        RigidBody::new(Rc::new(Mesh::from_geometry(&data)))
    }

    #[test]
    fn test_new_body_defaults() {
        let body = unit_cube();
        assert_eq!(body.position(), Point::new(0.0, 0.0, 0.0));
        assert_eq!(body.scale(), Vector::new(1.0, 1.0, 1.0));
        assert_eq!(body.angles(), Vector::new(0.0, 0.0, 0.0));
        assert_eq!(body.dimensions(), Dimension::UNIT);
        assert!(!body.is_selected());
    }

    #[test]
    fn test_move_is_additive() {
        let mut body = unit_cube();
        body.move_by(Vector::new(1.0, 2.0, 3.0));
        body.move_by(Vector::new(1.0, 2.0, 3.0));
        assert_eq!(body.position(), Point::new(2.0, 4.0, 6.0));

        body.scale_by(Vector::new(1.0, 0.0, -0.5));
        assert_eq!(body.scale(), Vector::new(2.0, 1.0, 0.5));

        body.rotate_by(Vector::new(90.0, 0.0, 0.0));
        body.rotate_by(Vector::new(90.0, 45.0, 0.0));
        assert_eq!(body.angles(), Vector::new(180.0, 45.0, 0.0));
    }

    #[test]
    fn test_dimensions_follow_scale() {
        let mut body = unit_cube();
        body.set_scale(Vector::new(2.0, 3.0, 4.0));
        assert_eq!(body.dimensions(), Dimension::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_clone_shares_mesh_but_not_transform() {
        let mut original = unit_cube();
        let copy = original.clone();
        original.move_by(Vector::new(1.0, 0.0, 0.0));

        assert!(Rc::ptr_eq(original.mesh(), copy.mesh()));
        assert_eq!(copy.position(), Point::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_collision_on_every_axis() {
        let a = unit_cube();
        let mut b = unit_cube();
        assert!(a.is_colliding(&b));

        // Touching faces still overlap
        b.set_position(Point::new(1.0, 0.0, 0.0));
        assert!(a.is_colliding(&b));

        for offset in [
            Vector::new(1.01, 0.0, 0.0),
            Vector::new(0.0, -1.01, 0.0),
            Vector::new(0.0, 0.0, 1.01),
        ] {
            b.set_position(offset);
            assert!(!a.is_colliding(&b));
            assert!(!b.is_colliding(&a));
        }
    }

    #[test]
    fn test_snapshot_restore() {
        let mut body = unit_cube();
        body.set_position(Point::new(1.0, 1.0, 1.0));
        let snapshot = body.snapshot();

        body.move_by(Vector::new(5.0, 0.0, 0.0));
        body.scale_by(Vector::new(1.0, 1.0, 1.0));
        body.rotate_by(Vector::new(30.0, 0.0, 0.0));
        body.restore(&snapshot);

        assert_eq!(body.snapshot(), snapshot);
    }

    #[test]
    fn test_draw_sets_material_before_mesh() {
        let mut body = unit_cube();
        body.set_position(Point::new(1.0, 2.0, 3.0));
        body.set_selected(true);

        let mut model = ModelStack::new();
        let mut recorder = DrawRecorder::new();
        body.draw(&mut model, &Light::default(), &mut recorder)
            .unwrap();

        let calls = recorder.calls();
        assert_eq!(calls.len(), 1);
        let uniforms = &calls[0].uniforms;
        assert_eq!(uniforms.diffuse_product[..3], [0.8, 0.5, 0.5]);
        assert_eq!(uniforms.model[3][..3], [1.0, 2.0, 3.0]);

        // The body's frame is gone again
        assert_eq!(model.depth(), 1);
        assert_eq!(model.matrix(), Matrix4::identity());
    }

    #[test]
    fn test_draw_translates_scales_then_rotates_y_z_x() {
        let mut body = unit_cube();
        body.set_position(Point::new(1.0, 2.0, 3.0));
        body.set_scale(Vector::new(2.0, 3.0, 4.0));
        body.set_angles(Vector::new(30.0, 45.0, 60.0));

        let mut model = ModelStack::new();
        let mut recorder = DrawRecorder::new();
        body.draw(&mut model, &Light::default(), &mut recorder)
            .unwrap();

        let expected = Matrix4::from_translation(Vector::new(1.0, 2.0, 3.0))
            * Matrix4::from_nonuniform_scale(2.0, 3.0, 4.0)
            * Matrix4::from_angle_y(Deg(30.0))
            * Matrix4::from_angle_z(Deg(45.0))
            * Matrix4::from_angle_x(Deg(60.0));
        let recorded = recorder.calls()[0].uniforms.model;
        for column in 0..4 {
            for row in 0..4 {
                assert!(
                    (recorded[column][row] - expected[column][row]).abs() < 1e-5,
                    "model[{}][{}]: {} != {}",
                    column,
                    row,
                    recorded[column][row],
                    expected[column][row]
                );
            }
        }

        // Any other rotation order gives a different matrix
        let swapped = Matrix4::from_translation(Vector::new(1.0, 2.0, 3.0))
            * Matrix4::from_nonuniform_scale(2.0, 3.0, 4.0)
            * Matrix4::from_angle_x(Deg(60.0))
            * Matrix4::from_angle_z(Deg(45.0))
            * Matrix4::from_angle_y(Deg(30.0));
        let differs = (0..4).any(|c| (0..4).any(|r| (recorded[c][r] - swapped[c][r]).abs() > 1e-3));
        assert!(differs);
    }
}
