//! # Edit Manager
//!
//! The interaction state machine of the editor. It owns the selection
//! cursor over the scene's bodies, the current [`EditMode`] and [`Axis`]
//! constraint, the last pointer position and a one-slot backup of the
//! selected body's transform.
//!
//! ## Transitions
//!
//! - `Translate`, `Scale` and `Rotate` can only be entered with a body selected.
//! - Entering `None` or `CameraMoving` forgets the pointer; every other mode
//!   records it as the origin of the next drag delta.
//! - `Axis::All` dominates single-axis requests. Setting a single axis while
//!   idle arms `CameraMoving` (wheel nudging along that axis), and clearing
//!   the axis drops back out of it.
//!
//! Invalid requests are ignored without error so the editor stays responsive.
//! Every accepted transition emits the status line at `info` level.

use std::fmt;

use cgmath::Point2;
use log::{debug, info};

use super::selector::Selector;
use crate::config::EditorConfig;
use crate::gfx::geometry::Vector;
use crate::gfx::scene::{RigidBody, TransformSnapshot};

/// What pointer and wheel input currently means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    None,
    /// Wheel nudges the camera along the held axis
    CameraMoving,
    /// Pointer drags orbit the camera around its center
    CameraFixing,
    Translate,
    Scale,
    Rotate,
}

impl EditMode {
    /// Whether this mode edits the selected body
    pub fn is_object_edit(self) -> bool {
        matches!(self, EditMode::Translate | EditMode::Scale | EditMode::Rotate)
    }

    /// Whether this mode measures pointer deltas
    pub fn tracks_pointer(self) -> bool {
        !matches!(self, EditMode::None | EditMode::CameraMoving)
    }

    pub fn name(self) -> &'static str {
        match self {
            EditMode::None => "None",
            EditMode::CameraMoving => "Moving Camera",
            EditMode::CameraFixing => "Fixing Camera",
            EditMode::Translate => "Translation",
            EditMode::Scale => "Scaling",
            EditMode::Rotate => "Rotation",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constraint applied to edits and camera nudges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    None,
    X,
    Y,
    Z,
    All,
}

impl Axis {
    /// X, Y or Z
    pub fn is_single(self) -> bool {
        matches!(self, Axis::X | Axis::Y | Axis::Z)
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::None => "None",
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::All => "All",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spreads `value` over the components selected by `axis`
pub fn value_on_axis(value: f32, axis: Axis) -> Vector {
    match axis {
        Axis::X => Vector::new(value, 0.0, 0.0),
        Axis::Y => Vector::new(0.0, value, 0.0),
        Axis::Z => Vector::new(0.0, 0.0, value),
        Axis::All => Vector::new(value, value, value),
        Axis::None => Vector::new(0.0, 0.0, 0.0),
    }
}

/// The argument with the larger magnitude, sign kept; ties go to `a`
pub fn max_abs(a: f32, b: f32) -> f32 {
    if b.abs() > a.abs() {
        b
    } else {
        a
    }
}

/// The argument with the smaller magnitude, sign kept; ties go to `b`
pub fn min_abs(a: f32, b: f32) -> f32 {
    if a.abs() < b.abs() {
        a
    } else {
        b
    }
}

pub struct EditManager {
    mode: EditMode,
    axis: Axis,
    pointer: Option<Point2<f32>>,
    backup: Option<TransformSnapshot>,
    selector: Selector,
    mouse_sensitivity: f32,
    wheel_sensitivity: f32,
    status_emissions: u64,
}

impl Default for EditManager {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl EditManager {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            mode: EditMode::None,
            axis: Axis::None,
            pointer: None,
            backup: None,
            selector: Selector::new(),
            mouse_sensitivity: config.mouse_sensitivity,
            wheel_sensitivity: config.wheel_sensitivity,
            status_emissions: 0,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Last pointer position, present while the mode tracks deltas
    pub fn pointer(&self) -> Option<Point2<f32>> {
        self.pointer
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut Selector {
        &mut self.selector
    }

    /// Snapshot that [`backup`](Self::backup) would restore
    pub fn checkpoint(&self) -> Option<&TransformSnapshot> {
        self.backup.as_ref()
    }

    pub fn is_object_editing(&self) -> bool {
        self.mode.is_object_edit()
    }

    /// Status line shown to the user
    pub fn status(&self) -> String {
        format!("edit mode: {}, axis: {}", self.mode, self.axis)
    }

    /// Number of status lines emitted so far
    pub fn status_emissions(&self) -> u64 {
        self.status_emissions
    }

    /// Requests a new edit mode with the pointer at `pointer`
    ///
    /// Returns whether the request was accepted. Object-edit modes are
    /// refused while nothing is selected.
    pub fn set_edit(&mut self, mode: EditMode, pointer: Point2<f32>, bodies: &[RigidBody]) -> bool {
        if mode.is_object_edit() && self.selector.element(bodies).is_none() {
            debug!("ignoring {} request: nothing selected", mode);
            return false;
        }
        self.enter(mode, pointer);
        self.log_status();
        true
    }

    /// Applies an axis request
    pub fn set_axis(&mut self, axis: Axis) {
        match axis {
            Axis::All => self.axis = Axis::All,
            Axis::None => {
                self.axis = Axis::None;
                if self.mode == EditMode::CameraMoving {
                    self.enter(EditMode::None, Point2::new(0.0, 0.0));
                }
            }
            Axis::X | Axis::Y | Axis::Z => {
                if self.axis != Axis::All {
                    self.axis = axis;
                }
                if self.mode == EditMode::None {
                    self.enter(EditMode::CameraMoving, Point2::new(0.0, 0.0));
                }
            }
        }
        self.log_status();
    }

    /// Scales a raw screen delta into edit units (degrees while rotating)
    pub fn normalize_delta(&self, raw: f32) -> f32 {
        let factor = if self.mode == EditMode::Rotate {
            180.0
        } else {
            1.0
        };
        raw * factor / self.mouse_sensitivity
    }

    /// Edit vector for normalized deltas under the current axis and mode
    ///
    /// A single axis takes the larger delta. No axis moves freely, using the
    /// smaller delta as depth, except while scaling. Otherwise the larger
    /// delta applies uniformly.
    pub fn drag_vector(&self, nx: f32, ny: f32) -> Vector {
        match self.axis {
            Axis::X | Axis::Y | Axis::Z => value_on_axis(max_abs(nx, ny), self.axis),
            Axis::None if self.mode != EditMode::Scale => Vector::new(nx, ny, min_abs(nx, ny)),
            _ => value_on_axis(max_abs(nx, ny), Axis::All),
        }
    }

    /// Applies a pointer move to the selected body
    ///
    /// The delta runs from the new position to the last one. Returns the
    /// vector applied, or `None` when not editing an object.
    pub fn pointer_moved(
        &mut self,
        position: Point2<f32>,
        bodies: &mut [RigidBody],
    ) -> Option<Vector> {
        if !self.is_object_editing() {
            return None;
        }
        let last = self.pointer.replace(position)?;

        let nx = self.normalize_delta(last.x - position.x);
        let ny = self.normalize_delta(last.y - position.y);
        let values = self.drag_vector(nx, ny);

        let body = self.selector.element_mut(bodies)?;
        match self.mode {
            EditMode::Translate => body.move_by(values),
            EditMode::Scale => body.scale_by(values),
            EditMode::Rotate => body.rotate_by(values),
            _ => return None,
        }
        Some(values)
    }

    /// Camera orbit delta for a pointer move while in `CameraFixing`
    ///
    /// The result is meant for `View::move_by(.., fixed_center = true)`.
    pub fn camera_drag(&mut self, position: Point2<f32>) -> Option<Vector> {
        if self.mode != EditMode::CameraFixing {
            return None;
        }
        let last = self.pointer.replace(position)?;
        Some(Vector::new(
            (position.x - last.x) / self.mouse_sensitivity,
            (position.y - last.y) / self.mouse_sensitivity,
            0.0,
        ))
    }

    /// Camera nudge for a wheel step along the held single axis
    ///
    /// Arms `CameraMoving` if another mode was active. Without a single axis
    /// held the wheel does nothing.
    pub fn scroll(&mut self, direction: f32) -> Option<Vector> {
        if !self.axis.is_single() {
            return None;
        }
        if self.mode != EditMode::CameraMoving {
            self.enter(EditMode::CameraMoving, Point2::new(0.0, 0.0));
            self.log_status();
        }
        Some(value_on_axis(direction / self.wheel_sensitivity, self.axis))
    }

    /// Replaces the backup with the selected body's transform
    ///
    /// Clears it when nothing is selected.
    pub fn set_checkpoint(&mut self, bodies: &[RigidBody]) {
        self.backup = self.selector.element(bodies).map(RigidBody::snapshot);
    }

    /// Restores the selected body from the backup
    ///
    /// Returns whether anything was restored.
    pub fn backup(&mut self, bodies: &mut [RigidBody]) -> bool {
        let Some(snapshot) = self.backup else {
            return false;
        };
        match self.selector.element_mut(bodies) {
            Some(body) => {
                body.restore(&snapshot);
                debug!("reverted selected body to checkpoint");
                true
            }
            None => false,
        }
    }

    /// Removes the selected body from the list
    ///
    /// The selection moves to the preceding body, stays on the first slot
    /// when the first body was removed, or clears when the list empties.
    pub fn delete_selected(&mut self, bodies: &mut Vec<RigidBody>) -> Option<RigidBody> {
        let index = self.selector.index(bodies)?;

        if bodies.len() == 1 {
            self.selector.deselect(bodies);
        } else if index != 0 {
            self.selector.select_previous(bodies);
        }
        let removed = bodies.remove(index);
        self.selector.reselect(bodies);

        if self.is_object_editing() && self.selector.is_not_present() {
            self.enter(EditMode::None, Point2::new(0.0, 0.0));
            self.log_status();
        }
        debug!("deleted body {}, {} left", index, bodies.len());
        Some(removed)
    }

    fn enter(&mut self, mode: EditMode, pointer: Point2<f32>) {
        self.pointer = mode.tracks_pointer().then_some(pointer);
        self.mode = mode;
    }

    fn log_status(&mut self) {
        self.status_emissions += 1;
        info!("{}", self.status());
    }
}
