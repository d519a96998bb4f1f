//! # Input Translation
//!
//! Turns raw winit keyboard, mouse and wheel events into [`InputAction`]s so
//! that the edit state machine never sees key codes or letter case.
//!
//! | Input | Action |
//! |-------|--------|
//! | wheel | [`InputAction::Scroll`] |
//! | middle button down / up | [`InputAction::CameraFixBegin`] / [`InputAction::CameraFixEnd`] |
//! | right button | [`InputAction::Revert`] |
//! | arrows, Tab, Shift+Tab | select next / previous |
//! | Space | toggle selection |
//! | Delete, Backspace | delete selected body |
//! | `.` / `n` | frame selection / reset camera |
//! | `x` `y` `z` | hold an axis |
//! | `t` `s` `r` | translate / scale / rotate |
//! | `1`..`9` | add a shape by menu id |
//! | Escape | exit |

use cgmath::Point2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::{Key, ModifiersState, NamedKey};

use super::edit_manager::{Axis, EditMode};

/// A user intent, independent of the device that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// One wheel step, `1.0` away from the user and `-1.0` towards
    Scroll(f32),
    CameraFixBegin(Point2<f32>),
    CameraFixEnd,
    PointerMoved(Point2<f32>),
    /// Restore the selected body from the checkpoint
    Revert,
    SelectNext,
    SelectPrevious,
    ToggleSelection,
    DeleteSelected,
    /// Center the camera on the selected body
    FrameSelected,
    ResetCamera,
    AxisPressed(Axis),
    AxisReleased,
    EditPressed(EditMode, Point2<f32>),
    EditReleased,
    /// Add the shape with the given menu id
    AddShape(u32),
    /// A key with no binding; only refreshes the checkpoint
    Checkpoint,
    Exit,
}

impl InputAction {
    /// Whether the action came from the keyboard or the shape menu
    pub fn is_discrete(&self) -> bool {
        !matches!(
            self,
            InputAction::Scroll(_)
                | InputAction::CameraFixBegin(_)
                | InputAction::CameraFixEnd
                | InputAction::PointerMoved(_)
                | InputAction::Revert
        )
    }
}

/// Tracks modifier keys and the pointer between events
#[derive(Debug, Clone, Copy)]
pub struct InputTranslator {
    modifiers: ModifiersState,
    pointer: Point2<f32>,
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl InputTranslator {
    pub fn new() -> Self {
        Self {
            modifiers: ModifiersState::empty(),
            pointer: Point2::new(0.0, 0.0),
        }
    }

    /// Last known pointer position in window pixels
    pub fn pointer(&self) -> Point2<f32> {
        self.pointer
    }

    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Translates a key event; repeats produce nothing
    pub fn key(&self, key: &Key, state: ElementState, repeat: bool) -> Option<InputAction> {
        if repeat {
            return None;
        }
        match state {
            ElementState::Pressed => Some(self.key_pressed(key)),
            ElementState::Released => Some(key_released(key)),
        }
    }

    pub fn mouse_button(&self, button: MouseButton, state: ElementState) -> Option<InputAction> {
        match (button, state) {
            (MouseButton::Middle, ElementState::Pressed) => {
                Some(InputAction::CameraFixBegin(self.pointer))
            }
            (MouseButton::Middle, ElementState::Released) => Some(InputAction::CameraFixEnd),
            (MouseButton::Right, ElementState::Pressed) => Some(InputAction::Revert),
            _ => None,
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) -> InputAction {
        self.pointer = Point2::new(x as f32, y as f32);
        InputAction::PointerMoved(self.pointer)
    }

    /// Translates a wheel event into a unit step; zero deltas produce nothing
    pub fn wheel(&self, delta: MouseScrollDelta) -> Option<InputAction> {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32,
        };
        (amount != 0.0).then(|| InputAction::Scroll(amount.signum()))
    }

    fn key_pressed(&self, key: &Key) -> InputAction {
        match key {
            Key::Named(NamedKey::ArrowUp | NamedKey::ArrowRight) => InputAction::SelectNext,
            Key::Named(NamedKey::ArrowDown | NamedKey::ArrowLeft) => InputAction::SelectPrevious,
            Key::Named(NamedKey::Tab) if self.modifiers.shift_key() => InputAction::SelectPrevious,
            Key::Named(NamedKey::Tab) => InputAction::SelectNext,
            Key::Named(NamedKey::Space) => InputAction::ToggleSelection,
            Key::Named(NamedKey::Delete | NamedKey::Backspace) => InputAction::DeleteSelected,
            Key::Named(NamedKey::Escape) => InputAction::Exit,
            _ => match character(key) {
                Some(' ') => InputAction::ToggleSelection,
                Some('.') => InputAction::FrameSelected,
                Some('n') => InputAction::ResetCamera,
                Some(c) => axis_for(c)
                    .map(InputAction::AxisPressed)
                    .or_else(|| edit_for(c).map(|mode| InputAction::EditPressed(mode, self.pointer)))
                    .or_else(|| shape_for(c).map(InputAction::AddShape))
                    .unwrap_or(InputAction::Checkpoint),
                None => InputAction::Checkpoint,
            },
        }
    }
}

fn key_released(key: &Key) -> InputAction {
    match character(key) {
        Some(c) if axis_for(c).is_some() => InputAction::AxisReleased,
        Some(c) if edit_for(c).is_some() => InputAction::EditReleased,
        _ => InputAction::Checkpoint,
    }
}

/// Single lowercase character carried by a key, if any
fn character(key: &Key) -> Option<char> {
    let Key::Character(text) = key else {
        return None;
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().next(),
        _ => None,
    }
}

fn axis_for(c: char) -> Option<Axis> {
    match c {
        'x' => Some(Axis::X),
        'y' => Some(Axis::Y),
        'z' => Some(Axis::Z),
        _ => None,
    }
}

fn edit_for(c: char) -> Option<EditMode> {
    match c {
        't' => Some(EditMode::Translate),
        's' => Some(EditMode::Scale),
        'r' => Some(EditMode::Rotate),
        _ => None,
    }
}

/// Digit keys 1..9 map to menu ids 0..8
fn shape_for(c: char) -> Option<u32> {
    match c.to_digit(10)? {
        0 => None,
        digit => Some(digit - 1),
    }
}
