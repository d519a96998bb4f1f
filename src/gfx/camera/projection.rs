//! Camera-to-clip transform

use cgmath::{perspective, Matrix4, Rad};

/// Default vertical field of view, 45 degrees in radians
pub const DEFAULT_FOV: f32 = std::f32::consts::FRAC_PI_4;
pub const DEFAULT_NEAR: f32 = 0.2;
pub const DEFAULT_FAR: f32 = 100.0;

/// Perspective projection parameters
///
/// Values are not validated. Callers keep `0 < near < far` and a field of
/// view strictly between 0 and pi for [`matrix`](Self::matrix) to be usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    aspect: f32,
    fov: f32,
    near: f32,
    far: f32,
}

impl Projection {
    /// Default projection for a viewport with the given aspect ratio
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Vertical field of view in radians
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    /// Updates the aspect ratio after a viewport resize
    ///
    /// A zero height (minimized window) leaves the projection unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// OpenGL-convention perspective matrix
    pub fn matrix(&self) -> Matrix4<f32> {
        perspective(Rad(self.fov), self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Point3, Transform};

    #[test]
    fn test_accessors() {
        let mut projection = Projection::new(2.0);
        assert_eq!(projection.fov(), DEFAULT_FOV);

        projection.set_near(1.0);
        projection.set_far(10.0);
        projection.set_fov(1.0);
        projection.resize(300, 100);

        assert_eq!(
            (projection.aspect(), projection.fov(), projection.near(), projection.far()),
            (3.0, 1.0, 1.0, 10.0)
        );
    }

    #[test]
    fn test_near_and_far_planes_map_to_clip_bounds() {
        let projection = Projection::new(1.0);
        let matrix = projection.matrix();

        let near = matrix.transform_point(Point3::new(0.0, 0.0, -DEFAULT_NEAR));
        let far = matrix.transform_point(Point3::new(0.0, 0.0, -DEFAULT_FAR));

        assert!((near.z + 1.0).abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }
}
