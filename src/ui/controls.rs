//! Control panel: global speed, pause, and per-planet speed sliders.
//!
//! The panel is collapsible and anchored to the top right. The planet list
//! scrolls once it outgrows the window, with its height capped relative to
//! the current window height. The sun deliberately has no slider row: it
//! does not revolve, and its spin rate is fixed.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::BodyId;
use crate::render::HoveredBody;
use crate::sim::SolarSystem;
use crate::types::{AnimationState, SPEED_MAX, SPEED_MIN, SPEED_STEP};

/// Vertical space reserved for window chrome above and below the planet
/// list. The list's scroll area gets whatever height remains.
pub const PANEL_RESERVED_HEIGHT: f32 = 200.0;

/// Whether the control panel is expanded.
#[derive(Resource)]
pub struct PanelState {
    pub open: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { open: true }
    }
}

/// Maximum height of the planet list for a given window height.
pub fn panel_max_height(window_height: f32) -> f32 {
    (window_height - PANEL_RESERVED_HEIGHT).max(0.0)
}

/// One-decimal readout shown next to each speed slider.
pub fn format_speed(value: f32) -> String {
    format!("{value:.1}")
}

/// Render the control panel.
pub fn control_panel(
    mut contexts: EguiContexts,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut state: ResMut<AnimationState>,
    mut system: ResMut<SolarSystem>,
    mut panel: ResMut<PanelState>,
    hovered: Res<HoveredBody>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    // Recomputed every frame, so window resizes take effect immediately.
    let max_height = panel_max_height(window.height());

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("controls")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .title_bar(false)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .corner_radius(6)
                .inner_margin(egui::Margin::symmetric(12, 10)),
        )
        .show(ctx, |ui| {
            render_panel_toggle(ui, &mut panel);
            if !panel.open {
                return;
            }

            ui.separator();
            render_global_controls(ui, &mut state);
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(max_height)
                .show(ui, |ui| {
                    for &id in BodyId::PLANETS {
                        render_planet_row(ui, id, &mut system, hovered.body == Some(id));
                    }
                });
        });
}

/// Header row that collapses or expands the panel body.
fn render_panel_toggle(ui: &mut egui::Ui, panel: &mut PanelState) {
    let text = if panel.open {
        "\u{25BC} Controls"
    } else {
        "\u{25BA} Controls"
    };

    let button = egui::Button::new(egui::RichText::new(text).size(14.0).strong()).frame(false);
    if ui.add(button).on_hover_text("Toggle panel (C)").clicked() {
        panel.open = !panel.open;
    }
}

/// Global speed slider and the pause button.
fn render_global_controls(ui: &mut egui::Ui, state: &mut AnimationState) {
    ui.label(egui::RichText::new("Global Speed").strong());
    ui.horizontal(|ui| {
        ui.add(
            egui::Slider::new(&mut state.global_speed, SPEED_MIN..=SPEED_MAX)
                .step_by(SPEED_STEP as f64)
                .show_value(false),
        );
        ui.label(egui::RichText::new(format_speed(state.global_speed)).monospace());
    });

    let icon = if state.paused { "\u{25B6}" } else { "\u{23F8}" };
    let button = egui::Button::new(egui::RichText::new(icon).size(18.0))
        .min_size(egui::vec2(40.0, 28.0));
    let hover = if state.paused {
        "Play (Space)"
    } else {
        "Pause (Space)"
    };
    if ui.add(button).on_hover_text(hover).clicked() {
        state.toggle_paused();
    }
}

/// One planet's name, readout, and speed slider. The row lights up while
/// its body is hovered in the scene.
fn render_planet_row(ui: &mut egui::Ui, id: BodyId, system: &mut SolarSystem, highlighted: bool) {
    let fill = if highlighted {
        colors::ROW_HIGHLIGHT
    } else {
        egui::Color32::TRANSPARENT
    };

    egui::Frame::NONE
        .fill(fill)
        .corner_radius(4)
        .inner_margin(egui::Margin::symmetric(6, 4))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(id.name()).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(format_speed(system.speed(id))).monospace());
                });
            });

            let mut speed = system.speed(id);
            let slider = egui::Slider::new(&mut speed, SPEED_MIN..=SPEED_MAX)
                .step_by(SPEED_STEP as f64)
                .show_value(false);
            if ui.add(slider).changed() {
                system.set_speed(id, speed);
            }
        });
}

/// Panel color palette.
mod colors {
    use bevy_egui::egui::Color32;

    /// Dark translucent panel background.
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 220);

    /// Fill behind the hovered body's control row.
    pub const ROW_HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(40, 80, 85, 200);
}
