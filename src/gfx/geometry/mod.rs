//! # Geometry Primitives
//!
//! Value types shared by every other part of the editor, plus procedural
//! generation of the primitive solids the scene is built from.
//!
//! ## Value Types
//!
//! - [`Point`] / [`Vector`] - the same 3-component type, used for positions and deltas
//! - [`Dimension`] - authored width/height/depth extents of a primitive
//! - [`Color`] - RGBA vertex color
//! - [`Index`] - one triangle as a triple of vertex indices
//!
//! ## Usage
//!
//! ```rust
//! use stagehand::gfx::geometry::{generate_cube, Dimension};
//!
//! let cube = generate_cube(Dimension::UNIT, None);
//! assert_eq!(cube.vertex_count(), 8);
//! ```

pub mod primitives;

pub use primitives::*;

use rand::Rng;

/// A position or a displacement in 3D space
pub type Vector = cgmath::Vector3<f32>;

/// Positions and vectors share one representation
pub type Point = Vector;

/// Extents of a primitive along x (width), y (height) and z (depth)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimension {
    pub const UNIT: Dimension = Dimension::new(1.0, 1.0, 1.0);

    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Component-wise product with a scale vector
    pub fn scaled(&self, scale: Vector) -> Self {
        Self::new(
            self.width * scale.x,
            self.height * scale.y,
            self.depth * scale.z,
        )
    }

    /// Half extents as a vector, as used for centering generated geometry
    pub fn half_extents(&self) -> Vector {
        Vector::new(self.width / 2.0, self.height / 2.0, self.depth / 2.0)
    }
}

/// RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color with random RGB components
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random(), 1.0)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// One triangle, as three indices into a vertex list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Index {
    pub i: u32,
    pub j: u32,
    pub k: u32,
}

impl Index {
    pub const fn new(i: u32, j: u32, k: u32) -> Self {
        Self { i, j, k }
    }
}

/// Generated geometry ready to become a [`Mesh`](crate::gfx::scene::Mesh)
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions
    pub vertices: Vec<Point>,
    /// One normal per vertex
    pub normals: Vec<Vector>,
    /// One color per vertex
    pub colors: Vec<Color>,
    /// Triangle list
    pub indices: Vec<Index>,
    /// Extents the geometry was authored with
    pub dimensions: Dimension,
}

impl GeometryData {
    /// Create an empty geometry with the given authored extents
    pub fn new(dimensions: Dimension) -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            indices: Vec::new(),
            dimensions,
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Triangle list flattened to the `u32` layout index buffers expect
    pub fn flat_indices(&self) -> Vec<u32> {
        self.indices
            .iter()
            .flat_map(|index| [index.i, index.j, index.k])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types_compare_by_component() {
        assert_eq!(Dimension::new(1.0, 2.0, 3.0), Dimension::new(1.0, 2.0, 3.0));
        assert_ne!(Dimension::new(1.0, 2.0, 3.0), Dimension::new(1.0, 2.0, 3.5));
        assert_eq!(Index::new(0, 1, 2), Index::new(0, 1, 2));
        assert_eq!(Color::default(), Color::WHITE);
        assert_eq!(Point::new(1.0, 2.0, 3.0), Vector::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_dimension_scaling() {
        let scaled = Dimension::new(1.0, 2.0, 4.0).scaled(Vector::new(2.0, 0.5, 1.0));
        assert_eq!(scaled, Dimension::new(2.0, 1.0, 4.0));
    }

    #[test]
    fn test_random_color_is_opaque_and_in_range() {
        let mut rng = rand::rng();
        for _ in 0..32 {
            let color = Color::random(&mut rng);
            assert_eq!(color.a, 1.0);
            for c in [color.r, color.g, color.b] {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_flat_indices() {
        let mut data = GeometryData::new(Dimension::UNIT);
        data.indices = vec![Index::new(0, 1, 2), Index::new(2, 3, 0)];
        assert_eq!(data.flat_indices(), vec![0, 1, 2, 2, 3, 0]);
        assert_eq!(data.triangle_count(), 2);
    }
}
