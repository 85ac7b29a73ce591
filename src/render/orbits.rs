//! Orbit path rendering using Bevy Gizmos.
//!
//! Each planet's path is a circle in the XZ plane around the origin, drawn
//! as a closed polyline. Paths are static; they do not move with the bodies.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::bodies::{BodyId, get_body_params};

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Update, draw_orbit_paths);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Number of polyline segments per circle (higher = smoother).
    pub segments: u32,
    /// Alpha value for the path color.
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 128,
            alpha: 0.5,
        }
    }
}

/// Faint dark gray, shared by every path.
fn orbit_color(alpha: f32) -> Color {
    Color::srgb_u8(0x22, 0x22, 0x22).with_alpha(alpha)
}

/// Point on an orbit circle of the given radius, `i` segments of
/// `segments` around the full turn.
fn orbit_point(distance: f32, i: u32, segments: u32) -> Vec3 {
    let theta = (i as f32 / segments as f32) * TAU;
    Vec3::new(distance * theta.cos(), 0.0, distance * theta.sin())
}

/// Draw every planet's orbit circle.
fn draw_orbit_paths(mut gizmos: Gizmos, settings: Res<OrbitPathSettings>) {
    if !settings.visible {
        return;
    }

    let segments = settings.segments.max(3);
    let color = orbit_color(settings.alpha);

    for &id in BodyId::PLANETS {
        let distance = get_body_params(id).distance;

        let mut prev: Option<Vec3> = None;
        for i in 0..=segments {
            let pt = orbit_point(distance, i, segments);
            if let Some(p0) = prev {
                gizmos.line(p0, pt, color);
            }
            prev = Some(pt);
        }
    }
}
