//! # Editor Controller
//!
//! Applies [`InputAction`]s to a [`Scene`] through the [`EditManager`].
//! Discrete actions (keys and the shape menu) refresh the checkpoint once
//! they are done, so a revert always returns to the state before the drag
//! that followed them.

use log::debug;

use super::edit_manager::{Axis, EditManager, EditMode};
use super::input::InputAction;
use crate::config::EditorConfig;
use crate::error::SceneError;
use crate::gfx::scene::Scene;
use cgmath::Point2;

/// What the event loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Default)]
pub struct EditorController {
    manager: EditManager,
}

impl EditorController {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            manager: EditManager::new(config),
        }
    }

    pub fn manager(&self) -> &EditManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut EditManager {
        &mut self.manager
    }

    /// Applies one action
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownShape`] when an added shape id names no
    /// primitive. The scene is left untouched in that case.
    pub fn handle(&mut self, action: InputAction, scene: &mut Scene) -> Result<Flow, SceneError> {
        let manager = &mut self.manager;
        let idle = Point2::new(0.0, 0.0);

        match action {
            InputAction::Scroll(direction) => {
                if let Some(step) = manager.scroll(direction) {
                    scene.view.move_by(step.x, step.y, step.z, false);
                }
            }
            InputAction::CameraFixBegin(pointer) => {
                manager.set_edit(EditMode::CameraFixing, pointer, scene.bodies());
            }
            InputAction::CameraFixEnd => {
                manager.set_edit(EditMode::None, idle, scene.bodies());
            }
            InputAction::PointerMoved(pointer) => {
                if let Some(delta) = manager.camera_drag(pointer) {
                    scene.view.move_by(delta.x, delta.y, delta.z, true);
                } else {
                    manager.pointer_moved(pointer, scene.bodies_mut());
                }
            }
            InputAction::Revert => {
                manager.backup(scene.bodies_mut());
            }
            InputAction::SelectNext => {
                manager.set_edit(EditMode::None, idle, scene.bodies());
                manager.selector_mut().select_next(scene.bodies_mut());
            }
            InputAction::SelectPrevious => {
                manager.set_edit(EditMode::None, idle, scene.bodies());
                manager.selector_mut().select_previous(scene.bodies_mut());
            }
            InputAction::ToggleSelection => {
                manager.set_edit(EditMode::None, idle, scene.bodies());
                let selector = manager.selector_mut();
                if selector.is_present() {
                    selector.deselect(scene.bodies_mut());
                } else {
                    selector.reselect(scene.bodies_mut());
                }
            }
            InputAction::DeleteSelected => {
                manager.delete_selected(scene.bodies_mut());
            }
            InputAction::FrameSelected => {
                let target = manager.selector().element(scene.bodies()).map(|body| body.position());
                if let Some(target) = target {
                    scene.view.set_center(target);
                }
            }
            InputAction::ResetCamera => scene.view.reset(),
            InputAction::AxisPressed(axis) => manager.set_axis(axis),
            InputAction::AxisReleased => manager.set_axis(Axis::None),
            InputAction::EditPressed(mode, pointer) => {
                if manager.mode() == mode {
                    manager.set_axis(Axis::None);
                    manager.set_edit(EditMode::None, pointer, scene.bodies());
                } else {
                    manager.set_axis(Axis::All);
                    manager.set_edit(mode, pointer, scene.bodies());
                }
            }
            InputAction::EditReleased => {
                if manager.axis() == Axis::All {
                    manager.set_axis(Axis::None);
                } else {
                    manager.set_edit(EditMode::None, idle, scene.bodies());
                }
            }
            InputAction::AddShape(id) => {
                let index = scene.add_shape_by_id(id)?;
                manager.selector_mut().set(scene.bodies_mut(), index);
            }
            InputAction::Checkpoint => {}
            InputAction::Exit => {
                debug!("exit requested");
                return Ok(Flow::Exit);
            }
        }

        if action.is_discrete() {
            manager.set_checkpoint(scene.bodies());
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{Point, Vector};
    use crate::gfx::scene::ShapeKind;

    fn setup() -> (EditorController, Scene) {
        (EditorController::default(), Scene::with_default_bodies(1.0))
    }

    fn apply(controller: &mut EditorController, scene: &mut Scene, actions: &[InputAction]) {
        for &action in actions {
            assert_eq!(controller.handle(action, scene), Ok(Flow::Continue));
        }
    }

    fn at(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn test_selection_cycles_and_wraps() {
        let (mut controller, mut scene) = setup();
        apply(&mut controller, &mut scene, &[InputAction::SelectNext]);
        assert_eq!(controller.manager().selector().index(scene.bodies()), Some(1));

        apply(&mut controller, &mut scene, &[InputAction::SelectNext]);
        assert_eq!(controller.manager().selector().index(scene.bodies()), Some(0));

        apply(&mut controller, &mut scene, &[InputAction::SelectPrevious]);
        assert_eq!(controller.manager().selector().index(scene.bodies()), Some(1));
    }

    #[test]
    fn test_toggle_selection_remembers_body() {
        let (mut controller, mut scene) = setup();
        apply(&mut controller, &mut scene, &[InputAction::SelectNext, InputAction::ToggleSelection]);
        assert!(controller.manager().selector().is_not_present());
        assert!(!scene.bodies()[1].is_selected());

        apply(&mut controller, &mut scene, &[InputAction::ToggleSelection]);
        assert_eq!(controller.manager().selector().index(scene.bodies()), Some(1));
    }

    #[test]
    fn test_translate_drag_then_revert() {
        let (mut controller, mut scene) = setup();
        apply(
            &mut controller,
            &mut scene,
            &[
                InputAction::SelectNext,
                InputAction::EditPressed(EditMode::Translate, at(200.0, 200.0)),
            ],
        );
        assert_eq!(controller.manager().mode(), EditMode::Translate);
        assert_eq!(controller.manager().axis(), Axis::All);

        apply(&mut controller, &mut scene, &[InputAction::PointerMoved(at(100.0, 200.0))]);
        assert_eq!(scene.bodies()[1].position(), Point::new(1.0, 1.0, 1.0));

        apply(&mut controller, &mut scene, &[InputAction::Revert]);
        assert_eq!(scene.bodies()[1].position(), Point::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_edit_release_drops_all_axis_first() {
        let (mut controller, mut scene) = setup();
        apply(
            &mut controller,
            &mut scene,
            &[
                InputAction::SelectNext,
                InputAction::EditPressed(EditMode::Scale, at(0.0, 0.0)),
                InputAction::EditReleased,
            ],
        );
        assert_eq!(controller.manager().mode(), EditMode::Scale);
        assert_eq!(controller.manager().axis(), Axis::None);

        apply(&mut controller, &mut scene, &[InputAction::EditReleased]);
        assert_eq!(controller.manager().mode(), EditMode::None);
    }

    #[test]
    fn test_same_edit_key_toggles_off() {
        let (mut controller, mut scene) = setup();
        apply(
            &mut controller,
            &mut scene,
            &[
                InputAction::SelectNext,
                InputAction::EditPressed(EditMode::Rotate, at(0.0, 0.0)),
                InputAction::EditReleased,
                InputAction::EditPressed(EditMode::Rotate, at(0.0, 0.0)),
            ],
        );
        assert_eq!(controller.manager().mode(), EditMode::None);
        assert_eq!(controller.manager().axis(), Axis::None);
    }

    #[test]
    fn test_edit_without_selection_is_ignored() {
        let (mut controller, mut scene) = setup();
        apply(
            &mut controller,
            &mut scene,
            &[InputAction::EditPressed(EditMode::Translate, at(0.0, 0.0))],
        );
        assert_eq!(controller.manager().mode(), EditMode::None);
    }

    #[test]
    fn test_axis_key_and_wheel_nudge_camera() {
        let (mut controller, mut scene) = setup();
        let before = scene.view.position();

        apply(
            &mut controller,
            &mut scene,
            &[InputAction::AxisPressed(Axis::Y), InputAction::Scroll(1.0)],
        );
        assert_eq!(controller.manager().mode(), EditMode::CameraMoving);
        assert_eq!(scene.view.position(), before + Vector::new(0.0, 0.1, 0.0));

        apply(&mut controller, &mut scene, &[InputAction::AxisReleased]);
        assert_eq!(controller.manager().mode(), EditMode::None);
    }

    #[test]
    fn test_camera_fixing_orbits_around_center() {
        let (mut controller, mut scene) = setup();
        let center = scene.view.center();

        apply(
            &mut controller,
            &mut scene,
            &[
                InputAction::CameraFixBegin(at(0.0, 0.0)),
                InputAction::PointerMoved(at(100.0, 0.0)),
            ],
        );
        assert_eq!(scene.view.center(), center);
        assert_eq!(scene.view.position(), Point::new(1.0, 0.5, -5.0));

        apply(&mut controller, &mut scene, &[InputAction::CameraFixEnd]);
        assert_eq!(controller.manager().mode(), EditMode::None);
    }

    #[test]
    fn test_add_shape_selects_it() {
        let (mut controller, mut scene) = setup();
        apply(&mut controller, &mut scene, &[InputAction::AddShape(ShapeKind::Torus.id())]);

        assert_eq!(scene.bodies().len(), 3);
        assert_eq!(controller.manager().selector().index(scene.bodies()), Some(2));
        assert!(controller.manager().checkpoint().is_some());
    }

    #[test]
    fn test_unknown_shape_is_reported() {
        let (mut controller, mut scene) = setup();
        assert_eq!(
            controller.handle(InputAction::AddShape(8), &mut scene),
            Err(SceneError::UnknownShape(8))
        );
        assert_eq!(scene.bodies().len(), 2);
    }

    #[test]
    fn test_delete_and_frame() {
        let (mut controller, mut scene) = setup();
        scene.bodies_mut()[1].set_position(Point::new(3.0, 0.0, 0.0));
        apply(
            &mut controller,
            &mut scene,
            &[InputAction::SelectNext, InputAction::FrameSelected],
        );
        assert_eq!(scene.view.position(), Point::new(3.0, 0.5, -5.0));

        apply(&mut controller, &mut scene, &[InputAction::DeleteSelected]);
        assert_eq!(scene.bodies().len(), 1);
        assert_eq!(controller.manager().selector().index(scene.bodies()), Some(0));

        apply(&mut controller, &mut scene, &[InputAction::ResetCamera]);
        assert_eq!(scene.view.position(), Point::new(0.0, 0.5, -5.0));
    }

    #[test]
    fn test_exit() {
        let (mut controller, mut scene) = setup();
        assert_eq!(controller.handle(InputAction::Exit, &mut scene), Ok(Flow::Exit));
    }
}
