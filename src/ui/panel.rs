// src/ui/panel.rs
//! Editor status overlay
//!
//! Shows the edit mode, axis and the selected body, and offers one button per
//! primitive. Buttons do not touch the scene: the click comes back as an
//! [`InputAction`] for the controller to apply like any other input.

use crate::editor::{EditManager, InputAction};
use crate::gfx::geometry::Vector;
use crate::gfx::scene::{Scene, ShapeKind};

const KEY_HELP: [(&str, &str); 12] = [
    ("T / S / R", "translate, scale, rotate"),
    ("X / Y / Z", "hold to constrain an axis"),
    ("wheel", "move camera along held axis"),
    ("middle drag", "orbit camera"),
    ("right click", "revert last edit"),
    ("arrows, Tab", "select next / previous"),
    ("space", "toggle selection"),
    ("delete", "remove selected body"),
    (".", "frame selected body"),
    ("N", "reset camera"),
    ("1 - 7", "add shape"),
    ("esc", "quit"),
];

/// Builds the overlay and returns the action requested through it, if any
///
/// # Arguments
/// * `ui` - ImGui frame being built
/// * `scene` - Scene to describe
/// * `manager` - Edit state to describe
pub fn editor_panel(ui: &imgui::Ui, scene: &Scene, manager: &EditManager) -> Option<InputAction> {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return None;
    }

    let mut requested = None;
    ui.window("Stagehand")
        .size([320.0, 0.0], imgui::Condition::FirstUseEver)
        .position([12.0, 12.0], imgui::Condition::FirstUseEver)
        .collapsible(true)
        .always_auto_resize(true)
        .build(|| {
            render_status(ui, scene, manager);
            ui.separator();
            requested = render_shape_menu(ui);
            ui.separator();
            render_key_help(ui);
        });
    requested
}

fn render_status(ui: &imgui::Ui, scene: &Scene, manager: &EditManager) {
    ui.text(format!("Mode: {}", manager.mode()));
    ui.text(format!("Axis: {}", manager.axis()));
    ui.text(format!("Bodies: {}", scene.bodies().len()));

    let selector = manager.selector();
    match (selector.index(scene.bodies()), selector.element(scene.bodies())) {
        (Some(index), Some(body)) => {
            ui.text(format!("Selected: #{}", index));
            ui.text(format!("  position {}", format_vector(body.position())));
            ui.text(format!("  scale    {}", format_vector(body.scale())));
            ui.text(format!("  angles   {}", format_vector(body.angles())));
        }
        _ => ui.text_disabled("Selected: none"),
    }
}

fn render_shape_menu(ui: &imgui::Ui) -> Option<InputAction> {
    ui.text("Add shape");
    let mut requested = None;
    for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
        if i % 4 != 0 {
            ui.same_line();
        }
        if ui.button(kind.name()) {
            requested = Some(InputAction::AddShape(kind.id()));
        }
    }
    requested
}

fn render_key_help(ui: &imgui::Ui) {
    if ui.collapsing_header("Keys", imgui::TreeNodeFlags::empty()) {
        for (key, description) in KEY_HELP {
            ui.text(format!("{:<12} {}", key, description));
        }
    }
}

fn format_vector(v: Vector) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}
