//! UI module providing the egui-based control panel.

mod controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use controls::{PanelState, format_speed, panel_max_height};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PanelState>()
            .add_systems(EguiPrimaryContextPass, controls::control_panel);
    }
}
