//! Floating body labels using egui for text rendering.
//!
//! At most one planet label is visible at a time: the hovered body's. The
//! sun's label is the exception and stays up whenever nothing else claims
//! the pointer.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::bodies::BodyId;
use crate::camera::MainCamera;
use crate::render::highlight::HoveredBody;
use crate::sim::SolarSystem;

/// Plugin providing body label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>()
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Label font size in points.
    pub font_size: f32,
    /// Offset from the body's projected center in screen pixels.
    pub offset: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            font_size: 14.0,
            offset: 15.0,
        }
    }
}

/// Which labels should be on screen for a given hover state.
pub fn visible_labels(hovered: Option<BodyId>) -> Vec<BodyId> {
    match hovered {
        Some(id) => vec![id],
        // Nothing hovered: the sun keeps its label.
        None => vec![BodyId::Sun],
    }
}

/// Draw the currently visible body labels at their projected positions.
fn draw_body_labels(
    mut egui_ctx: EguiContexts,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    system: Res<SolarSystem>,
    hovered: Res<HoveredBody>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };

    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for id in visible_labels(hovered.body) {
                let world_pos = system.position(id);

                // Project world position to screen; bodies behind the
                // camera fail the conversion and keep their label hidden.
                let Ok(screen_pos) = camera.world_to_viewport(camera_transform, world_pos) else {
                    continue;
                };

                // Offset label slightly below and to the right of the body
                let label_pos = egui::pos2(
                    screen_pos.x + settings.offset,
                    screen_pos.y + settings.offset,
                );

                let text = id.name();
                let font = egui::FontId::proportional(settings.font_size);

                // Shadow
                painter.text(
                    label_pos + egui::vec2(1.0, 1.0),
                    egui::Align2::LEFT_TOP,
                    text,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
                );

                // Main text
                painter.text(
                    label_pos,
                    egui::Align2::LEFT_TOP,
                    text,
                    font,
                    egui::Color32::from_rgba_unmultiplied(220, 220, 220, 230),
                );
            }
        });
}
