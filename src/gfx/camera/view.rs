//! Camera placement (the View transform)

use cgmath::{EuclideanSpace, Matrix4, Point3};

use crate::gfx::geometry::{Point, Vector};

/// Where a freshly created or reset camera stands
pub const DEFAULT_POSITION: Point = Point::new(0.0, 0.5, -5.0);
/// Default look direction; the camera looks at `position - direction`
pub const DEFAULT_DIRECTION: Vector = Vector::new(0.0, 0.0, -1.0);
/// Default up vector
pub const DEFAULT_NORMAL: Vector = Vector::new(0.0, 1.0, 0.0);

/// World-to-camera transform described by three free-form vectors
///
/// The looked-at point is not stored: it is always derived as
/// `position - direction`, so moving position and direction by the same
/// delta orbits the camera around a fixed center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    position: Point,
    direction: Vector,
    normal: Vector,
}

impl Default for View {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION, DEFAULT_DIRECTION, DEFAULT_NORMAL)
    }
}

impl View {
    pub fn new(position: Point, direction: Vector, normal: Vector) -> Self {
        Self {
            position,
            direction,
            normal,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// The point the camera looks at
    pub fn center(&self) -> Point {
        self.position - self.direction
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_direction(&mut self, direction: Vector) {
        self.direction = direction;
    }

    pub fn set_normal(&mut self, normal: Vector) {
        self.normal = normal;
    }

    /// Frames `target` the same way the default camera frames the origin
    ///
    /// The direction goes back to [`DEFAULT_DIRECTION`] and the camera is
    /// placed at `target + DEFAULT_POSITION`.
    pub fn set_center(&mut self, target: Point) {
        self.direction = DEFAULT_DIRECTION;
        self.position = target + DEFAULT_POSITION;
    }

    /// Moves the camera by `(dx, dy, dz)`
    ///
    /// # Arguments
    /// * `fixed_center` - when true the direction moves too, which keeps
    ///   [`center`](Self::center) in place and orbits around it. Otherwise the
    ///   center travels with the camera (a pan).
    pub fn move_by(&mut self, dx: f32, dy: f32, dz: f32, fixed_center: bool) {
        let delta = Vector::new(dx, dy, dz);
        self.position += delta;
        if fixed_center {
            self.direction += delta;
        }
    }

    /// Back to the default placement
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Right-handed look-at matrix from position towards the center
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.position),
            Point3::from_vec(self.center()),
            self.normal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Transform};

    #[test]
    fn test_center_is_position_minus_direction() {
        let view = View::default();
        assert_eq!(view.center(), Point::new(0.0, 0.5, -4.0));
    }

    #[test]
    fn test_fixed_center_move_orbits() {
        let mut view = View::default();
        let center = view.center();

        view.move_by(1.0, -2.0, 0.5, true);

        assert_eq!(view.center(), center);
        assert_eq!(view.position(), DEFAULT_POSITION + Vector::new(1.0, -2.0, 0.5));
    }

    #[test]
    fn test_free_move_pans() {
        let mut view = View::default();
        let center = view.center();

        view.move_by(1.0, 0.0, 0.0, false);

        assert_eq!(view.center(), center + Vector::unit_x());
        assert_eq!(view.position(), DEFAULT_POSITION + Vector::unit_x());
    }

    #[test]
    fn test_set_center_offsets_from_default_position() {
        let mut view = View::default();
        view.set_direction(Vector::new(3.0, 3.0, 3.0));

        view.set_center(Point::new(2.0, 0.0, 1.0));

        assert_eq!(view.direction(), DEFAULT_DIRECTION);
        assert_eq!(view.position(), Point::new(2.0, 0.5, -4.0));
    }

    #[test]
    fn test_matrix_maps_eye_to_origin() {
        let view = View::default();
        let eye = view.matrix().transform_point(Point3::from_vec(view.position()));
        assert!(eye.to_vec().magnitude() < 1e-5);

        // The center lies straight ahead, down the -Z axis of camera space
        let center = view.matrix().transform_point(Point3::from_vec(view.center()));
        assert!(center.x.abs() < 1e-5 && center.y.abs() < 1e-5);
        assert!(center.z < 0.0);
    }
}
