// src/editor/mod.rs
//! Interactive editing
//!
//! Selection, the edit-mode state machine, input translation and the
//! controller that applies translated input to a [`Scene`](crate::gfx::scene::Scene).
//!
//! ```rust
//! use stagehand::editor::{EditorController, Flow, InputAction};
//! use stagehand::gfx::scene::Scene;
//!
//! let mut scene = Scene::with_default_bodies(16.0 / 9.0);
//! let mut controller = EditorController::default();
//!
//! let flow = controller.handle(InputAction::SelectNext, &mut scene).unwrap();
//! assert_eq!(flow, Flow::Continue);
//! assert_eq!(controller.manager().selector().index(scene.bodies()), Some(1));
//! ```

pub mod controller;
pub mod edit_manager;
pub mod input;
pub mod selector;

pub use controller::{EditorController, Flow};
pub use edit_manager::{max_abs, min_abs, value_on_axis, Axis, EditManager, EditMode};
pub use input::{InputAction, InputTranslator};
pub use selector::{Selectable, Selector};
