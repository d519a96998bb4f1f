//! Library of primitive shapes that can be added to a scene

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::mesh::Mesh;
use crate::error::SceneError;
use crate::gfx::geometry::{
    generate_cone, generate_cube, generate_cylinder, generate_plane, generate_pyramid,
    generate_sphere, generate_torus, Dimension, GeometryData, TORUS_DIMENSIONS, TORUS_THICKNESS,
};

/// Primitive kinds, numbered by their menu id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Plane = 0,
    Cube = 1,
    Pyramid = 2,
    Sphere = 3,
    Cylinder = 4,
    Cone = 5,
    Torus = 6,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Plane,
        ShapeKind::Cube,
        ShapeKind::Pyramid,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Torus,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Plane => "Plane",
            ShapeKind::Cube => "Cube",
            ShapeKind::Pyramid => "Pyramid",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Torus => "Torus",
        }
    }

    /// Generates the default-sized geometry of this kind with random colors
    pub fn generate(self) -> GeometryData {
        let unit = Dimension::UNIT;
        match self {
            ShapeKind::Plane => generate_plane(unit, None),
            ShapeKind::Cube => generate_cube(unit, None),
            ShapeKind::Pyramid => generate_pyramid(unit, None),
            ShapeKind::Sphere => generate_sphere(unit, None),
            ShapeKind::Cylinder => generate_cylinder(unit, None),
            ShapeKind::Cone => generate_cone(unit, None),
            ShapeKind::Torus => generate_torus(TORUS_DIMENSIONS, TORUS_THICKNESS, None),
        }
    }
}

impl TryFrom<u32> for ShapeKind {
    type Error = SceneError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or(SceneError::UnknownShape(id))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds each primitive mesh once and hands out shared references
#[derive(Debug, Default)]
pub struct ShapeLibrary {
    meshes: HashMap<ShapeKind, Rc<Mesh>>,
}

impl ShapeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh(&mut self, kind: ShapeKind) -> Rc<Mesh> {
        Rc::clone(
            self.meshes
                .entry(kind)
                .or_insert_with(|| Rc::new(Mesh::from_geometry(&kind.generate()))),
        )
    }

    /// Meshes built so far
    pub fn meshes(&self) -> impl Iterator<Item = &Rc<Mesh>> {
        self.meshes.values()
    }
}
