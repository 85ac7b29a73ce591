//! Pointer picking and hover feedback for celestial bodies.
//!
//! A ray is cast from the pointer through the scene each frame and
//! intersected with every body's bounding sphere. The nearest hit becomes
//! the hovered body, which the label and control panel systems key off.

use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::bodies::{BodyId, get_body_params};
use crate::camera::MainCamera;
use crate::input::PointerState;
use crate::sim::SolarSystem;
use crate::types::UpdateSet;

/// Plugin providing hover detection and highlighting.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>().add_systems(
            Update,
            (detect_hover, draw_highlight)
                .chain()
                .in_set(UpdateSet::Hover),
        );
    }
}

/// Resource tracking the currently hovered body.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct HoveredBody {
    /// Body under the pointer, if any.
    pub body: Option<BodyId>,
}

/// Map normalized device coordinates back to viewport coordinates
/// (logical pixels, +Y down from the top left).
pub fn ndc_to_screen(ndc: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * viewport.x,
        (-ndc.y * 0.5 + 0.5) * viewport.y,
    )
}

/// Distance along a ray to where it first enters a sphere.
///
/// `direction` must be normalized. Returns `None` when the ray misses or
/// the sphere lies entirely behind the origin; an origin inside the sphere
/// yields the exit distance.
pub fn ray_sphere_intersection(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let offset = origin - center;
    let half_b = offset.dot(direction);
    let c = offset.length_squared() - radius * radius;

    let discriminant = half_b * half_b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = -half_b - sqrt_d;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -half_b + sqrt_d;
    if far >= 0.0 {
        return Some(far);
    }
    None
}

/// Cast a ray from the pointer and find the nearest body it passes through.
fn detect_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    pointer: Res<PointerState>,
    system: Res<SolarSystem>,
    mut hovered: ResMut<HoveredBody>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let viewport = Vec2::new(window.width(), window.height());
    let screen_pos = ndc_to_screen(pointer.ndc, viewport);

    let Ok(ray) = camera.viewport_to_world(camera_transform, screen_pos) else {
        hovered.body = None;
        return;
    };

    // Nearest-first: the closest intersection along the ray wins
    let mut closest: Option<(BodyId, f32)> = None;

    for &id in BodyId::ALL {
        let center = system.position(id);
        let radius = get_body_params(id).radius;

        if let Some(dist) = ray_sphere_intersection(ray.origin, *ray.direction, center, radius) {
            if closest.map_or(true, |(_, d)| dist < d) {
                closest = Some((id, dist));
            }
        }
    }

    hovered.body = closest.map(|(id, _)| id);
}

/// Draw a highlight ring around the hovered body, in the orbital plane.
fn draw_highlight(mut gizmos: Gizmos, hovered: Res<HoveredBody>, system: Res<SolarSystem>) {
    let Some(id) = hovered.body else {
        return;
    };

    let center = system.position(id);
    let ring_radius = get_body_params(id).radius.max(1.0) * 1.5;
    let color = Color::srgba(0.0, 1.0, 1.0, 0.8); // Cyan

    let segments = 32;
    for i in 0..segments {
        let t0 = (i as f32 / segments as f32) * TAU;
        let t1 = ((i + 1) as f32 / segments as f32) * TAU;

        let p0 = center + Vec3::new(ring_radius * t0.cos(), 0.0, ring_radius * t0.sin());
        let p1 = center + Vec3::new(ring_radius * t1.cos(), 0.0, ring_radius * t1.sin());

        gizmos.line(p0, p1, color);
    }
}
