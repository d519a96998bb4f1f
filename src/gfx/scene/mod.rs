//! # Scene Management Module
//!
//! The scene graph of the editor: shared primitive meshes, the rigid bodies
//! that place them, the model transform stack used while drawing, and the
//! [`Scene`] context that owns all of it together with the camera.
//!
//! ## Key Components
//!
//! - [`Scene`] - owns the body list, camera, projection and light
//! - [`RigidBody`] - a positioned, scaled, rotated mesh instance
//! - [`ModelStack`] - push/pull stack of model matrices
//! - [`Mesh`] - immutable GPU-ready geometry shared through `Rc`
//! - [`ShapeKind`] / [`ShapeLibrary`] - the primitives the user can add
//!
//! ## Usage
//!
//! ```no_run
//! use stagehand::gfx::scene::{Scene, ShapeKind};
//! use stagehand::gfx::rendering::DrawRecorder;
//!
//! let mut scene = Scene::with_default_bodies(16.0 / 9.0);
//! scene.add_shape(ShapeKind::Sphere);
//!
//! let mut recorder = DrawRecorder::new();
//! scene.render(&mut recorder, 0.0).unwrap();
//! ```

pub mod mesh;
pub mod model;
pub mod rigid_body;
pub mod scene;
pub mod shapes;
pub mod vertex;

// Re-export main types
pub use mesh::{DrawMesh, Mesh, MeshBuffers};
pub use model::{ModelFrame, ModelStack};
pub use rigid_body::{RigidBody, TransformSnapshot};
pub use scene::Scene;
pub use shapes::{ShapeKind, ShapeLibrary};
pub use vertex::Vertex3D;
