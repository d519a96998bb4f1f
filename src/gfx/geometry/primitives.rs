//! # Primitive Shape Generation
//!
//! Procedural generators for the solids offered by the editor. Every shape is
//! centered on the origin and sized by its [`Dimension`]. Normals point from
//! the center through each vertex. Without an explicit color, every vertex
//! gets a random one.

use super::{Color, Dimension, GeometryData, Index, Point};
use std::f32::consts::PI;

/// Rings along the main axis of curved solids
pub const STACKS: u32 = 30;
/// Segments around the main axis of curved solids
pub const SLICES: u32 = 30;

/// Default outer extents of a torus
pub const TORUS_DIMENSIONS: Dimension = Dimension::new(0.75, 0.75, 0.75);
/// Default ring thickness of a torus
pub const TORUS_THICKNESS: Dimension = Dimension::new(0.25, 0.25, 0.25);

/// Generate a flat square in the XZ plane
///
/// The height of `dimensions` is recorded but the plane itself has none.
pub fn generate_plane(dimensions: Dimension, color: Option<Color>) -> GeometryData {
    let h = dimensions.half_extents();
    let mut data = GeometryData::new(dimensions);

    data.vertices = vec![
        Point::new(-h.x, 0.0, h.z),
        Point::new(h.x, 0.0, h.z),
        Point::new(h.x, 0.0, -h.z),
        Point::new(-h.x, 0.0, -h.z),
    ];
    data.normals = vec![Point::unit_y(); 4];
    data.indices = vec![Index::new(0, 1, 2), Index::new(0, 2, 3)];
    data.colors = vertex_colors(color, data.vertices.len());

    data
}

/// Generate a box with 8 shared corners
pub fn generate_cube(dimensions: Dimension, color: Option<Color>) -> GeometryData {
    let h = dimensions.half_extents();
    let mut data = GeometryData::new(dimensions);

    data.vertices = vec![
        // Front face
        Point::new(-h.x, -h.y, h.z),
        Point::new(h.x, -h.y, h.z),
        Point::new(h.x, h.y, h.z),
        Point::new(-h.x, h.y, h.z),
        // Back face
        Point::new(-h.x, -h.y, -h.z),
        Point::new(h.x, -h.y, -h.z),
        Point::new(h.x, h.y, -h.z),
        Point::new(-h.x, h.y, -h.z),
    ];

    data.indices = vec![
        // Front
        Index::new(0, 1, 2),
        Index::new(2, 3, 0),
        // Right
        Index::new(1, 5, 6),
        Index::new(6, 2, 1),
        // Back
        Index::new(7, 6, 5),
        Index::new(5, 4, 7),
        // Left
        Index::new(4, 0, 3),
        Index::new(3, 7, 4),
        // Bottom
        Index::new(4, 5, 1),
        Index::new(1, 0, 4),
        // Top
        Index::new(3, 2, 6),
        Index::new(6, 7, 3),
    ];

    finish_radial(data, color)
}

/// Generate a square-based pyramid with its apex on +Y
pub fn generate_pyramid(dimensions: Dimension, color: Option<Color>) -> GeometryData {
    let h = dimensions.half_extents();
    let mut data = GeometryData::new(dimensions);

    data.vertices = vec![
        Point::new(-h.x, -h.y, h.z),
        Point::new(h.x, -h.y, h.z),
        Point::new(h.x, -h.y, -h.z),
        Point::new(-h.x, -h.y, -h.z),
        Point::new(0.0, h.y, 0.0),
    ];

    data.indices = vec![
        // Base
        Index::new(0, 1, 2),
        Index::new(0, 2, 3),
        // Sides
        Index::new(0, 4, 3),
        Index::new(0, 1, 4),
        Index::new(3, 2, 4),
        Index::new(1, 2, 4),
    ];

    finish_radial(data, color)
}

/// Generate a UV sphere (an ellipsoid for non-uniform dimensions)
pub fn generate_sphere(dimensions: Dimension, color: Option<Color>) -> GeometryData {
    let h = dimensions.half_extents();
    let data = surface_grid(dimensions, |stack, slice| {
        let phi = stack as f32 * PI / STACKS as f32;
        let theta = 2.0 * slice as f32 * PI / SLICES as f32;
        Point::new(
            h.x * theta.cos() * phi.sin(),
            h.y * phi.cos(),
            h.z * theta.sin() * phi.sin(),
        )
    });

    finish_radial(data, color)
}

/// Generate an open cylinder along Y
pub fn generate_cylinder(dimensions: Dimension, color: Option<Color>) -> GeometryData {
    let h = dimensions.half_extents();
    let data = surface_grid(dimensions, |stack, slice| {
        let t = stack as f32 / STACKS as f32;
        let theta = 2.0 * slice as f32 * PI / SLICES as f32;
        Point::new(
            h.x * theta.cos(),
            dimensions.height * (t - 0.5),
            h.z * theta.sin(),
        )
    });

    finish_radial(data, color)
}

/// Generate an open cone along Y with its tip at the bottom
pub fn generate_cone(dimensions: Dimension, color: Option<Color>) -> GeometryData {
    let h = dimensions.half_extents();
    let data = surface_grid(dimensions, |stack, slice| {
        let t = stack as f32 / STACKS as f32;
        let theta = 2.0 * slice as f32 * PI / SLICES as f32;
        Point::new(
            h.x * t * theta.cos(),
            dimensions.height * (t - 0.5),
            h.z * t * theta.sin(),
        )
    });

    finish_radial(data, color)
}

/// Generate a torus lying in the XZ plane
///
/// `dimensions` sizes the ring's center line, `thickness` the tube around it.
pub fn generate_torus(
    dimensions: Dimension,
    thickness: Dimension,
    color: Option<Color>,
) -> GeometryData {
    let h = dimensions.half_extents();
    let t = thickness.half_extents();
    let outer = Dimension::new(
        dimensions.width + thickness.width,
        thickness.height,
        dimensions.depth + thickness.depth,
    );

    let data = surface_grid(outer, |stack, slice| {
        let phi = 2.0 * stack as f32 * PI / STACKS as f32;
        let theta = 2.0 * slice as f32 * PI / SLICES as f32;
        Point::new(
            (h.x + t.x * phi.cos()) * theta.cos(),
            t.y * phi.sin(),
            (h.z + t.z * phi.cos()) * theta.sin(),
        )
    });

    finish_radial(data, color)
}

/// Builds a (STACKS + 1) x (SLICES + 1) vertex grid and triangulates its quads
fn surface_grid<F>(dimensions: Dimension, vertex_at: F) -> GeometryData
where
    F: Fn(u32, u32) -> Point,
{
    let mut data = GeometryData::new(dimensions);
    let row = SLICES + 1;

    for stack in 0..=STACKS {
        for slice in 0..=SLICES {
            data.vertices.push(vertex_at(stack, slice));
        }
    }

    for stack in 0..STACKS {
        for slice in 0..SLICES {
            let a = stack * row + slice;
            let b = a + row;
            data.indices.push(Index::new(a, b + 1, b));
            data.indices.push(Index::new(b + 1, a, a + 1));
        }
    }

    data
}

/// Radial normals (center to vertex) and per-vertex colors
fn finish_radial(mut data: GeometryData, color: Option<Color>) -> GeometryData {
    data.normals = data.vertices.clone();
    data.colors = vertex_colors(color, data.vertices.len());
    data
}

fn vertex_colors(color: Option<Color>, count: usize) -> Vec<Color> {
    match color {
        Some(color) => vec![color; count],
        None => {
            let mut rng = rand::rng();
            (0..count).map(|_| Color::random(&mut rng)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(data: &GeometryData) {
        let count = data.vertex_count() as u32;
        assert!(count > 0);
        assert_eq!(data.normals.len(), data.vertices.len());
        assert_eq!(data.colors.len(), data.vertices.len());
        assert!(data.flat_indices().iter().all(|&i| i < count));
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(Dimension::new(2.0, 1.0, 4.0), None);
        assert_eq!(plane.vertex_count(), 4);
        assert_eq!(plane.triangle_count(), 2);
        assert!(plane.vertices.iter().all(|v| v.y == 0.0));
        assert_eq!(plane.vertices[1], Point::new(1.0, 0.0, 2.0));
        assert_well_formed(&plane);
    }

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube(Dimension::new(2.0, 4.0, 6.0), None);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.vertices[2], Point::new(1.0, 2.0, 3.0));
        assert_eq!(cube.dimensions, Dimension::new(2.0, 4.0, 6.0));
        assert_well_formed(&cube);
    }

    #[test]
    fn test_pyramid_apex_on_top() {
        let pyramid = generate_pyramid(Dimension::UNIT, None);
        assert_eq!(pyramid.vertex_count(), 5);
        assert_eq!(pyramid.vertices[4], Point::new(0.0, 0.5, 0.0));
        assert_well_formed(&pyramid);
    }

    #[test]
    fn test_curved_solids_are_well_formed() {
        let expected_vertices = ((STACKS + 1) * (SLICES + 1)) as usize;
        let expected_triangles = (2 * STACKS * SLICES) as usize;

        for data in [
            generate_sphere(Dimension::UNIT, None),
            generate_cylinder(Dimension::UNIT, None),
            generate_cone(Dimension::UNIT, None),
            generate_torus(TORUS_DIMENSIONS, TORUS_THICKNESS, None),
        ] {
            assert_eq!(data.vertex_count(), expected_vertices);
            assert_eq!(data.triangle_count(), expected_triangles);
            assert_well_formed(&data);
        }
    }

    #[test]
    fn test_sphere_stays_within_extents() {
        let sphere = generate_sphere(Dimension::new(2.0, 2.0, 2.0), None);
        for v in &sphere.vertices {
            assert!((v.x * v.x + v.y * v.y + v.z * v.z).sqrt() <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_explicit_color_is_applied_to_every_vertex() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let cube = generate_cube(Dimension::UNIT, Some(red));
        assert!(cube.colors.iter().all(|&c| c == red));
    }

    #[test]
    fn test_missing_color_gives_opaque_random_colors() {
        let colors = vertex_colors(None, 64);
        assert_eq!(colors.len(), 64);
        assert!(colors.iter().all(|c| c.a == 1.0));
        assert!(colors
            .iter()
            .all(|c| [c.r, c.g, c.b].iter().all(|v| (0.0..1.0).contains(v))));
    }
}
