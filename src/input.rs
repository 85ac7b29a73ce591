//! Pointer tracking and keyboard shortcuts.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::types::AnimationState;
use crate::ui::PanelState;

/// Most recent pointer position in normalized device coordinates.
///
/// X and Y both span [-1, 1] with +Y up and (0, 0) at the window center.
/// The value is only refreshed while the cursor is inside the window, so it
/// holds the last known position after the cursor leaves. Starts at the
/// center, which points the initial pick ray at the sun.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub ndc: Vec2,
}

/// Plugin providing pointer tracking and keyboard shortcuts.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_systems(Update, (track_pointer, keyboard_shortcuts));
    }
}

/// Convert a cursor position (logical pixels, +Y down from the top left)
/// into normalized device coordinates.
pub fn cursor_to_ndc(cursor: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        (cursor.x / window_size.x) * 2.0 - 1.0,
        -((cursor.y / window_size.y) * 2.0 - 1.0),
    )
}

/// Mirror the cursor position into [`PointerState`].
fn track_pointer(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };

    pointer.ndc = cursor_to_ndc(cursor_pos, Vec2::new(window.width(), window.height()));
}

/// Handle keyboard shortcuts for animation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<AnimationState>,
    mut panel: ResMut<PanelState>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        state.toggle_paused();
        info!(
            "Animation {}",
            if state.paused { "paused" } else { "running" }
        );
    }

    // C: collapse or expand the control panel
    if keys.just_pressed(KeyCode::KeyC) {
        panel.open = !panel.open;
    }
}
