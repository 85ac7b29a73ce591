//! Geometry tests for pointer picking and label projection.
//!
//! The camera math here mirrors the render pipeline with plain glam
//! matrices, so the screen-mapping and ray-casting helpers can be checked
//! without spinning up a window.

use bevy::math::{Mat4, Vec2, Vec3};

use orrery::bodies::{BodyId, get_body_params};
use orrery::camera::{FAR_PLANE, FIELD_OF_VIEW_DEGREES, INITIAL_POSITION, NEAR_PLANE};
use orrery::input::cursor_to_ndc;
use orrery::render::highlight::{ndc_to_screen, ray_sphere_intersection};
use orrery::sim::SolarSystem;

const VIEWPORT: Vec2 = Vec2::new(1600.0, 900.0);

/// Clip-from-world matrix for the camera's starting pose.
fn camera_clip_from_world() -> Mat4 {
    let projection = Mat4::perspective_rh(
        FIELD_OF_VIEW_DEGREES.to_radians(),
        VIEWPORT.x / VIEWPORT.y,
        NEAR_PLANE,
        FAR_PLANE,
    );
    let view = Mat4::look_at_rh(INITIAL_POSITION, Vec3::ZERO, Vec3::Y);
    projection * view
}

/// Project a world point to normalized device coordinates. Points behind
/// the camera have no projection.
fn project_to_ndc(clip_from_world: Mat4, world: Vec3) -> Option<Vec3> {
    let clip = clip_from_world * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    Some(clip.truncate() / clip.w)
}

fn in_unit_square(ndc: Vec3) -> bool {
    ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0
}

// ==== Label projection ====

#[test]
fn test_sun_projects_near_screen_center() {
    let ndc = project_to_ndc(camera_clip_from_world(), Vec3::ZERO)
        .expect("sun is in front of the camera");
    assert!(in_unit_square(ndc));

    // The camera looks straight at the origin, so the sun sits dead center.
    let screen = ndc_to_screen(ndc.truncate(), VIEWPORT);
    assert!((screen.x - VIEWPORT.x / 2.0).abs() < 1.0);
    assert!((screen.y - VIEWPORT.y / 2.0).abs() < 1.0);
}

#[test]
fn test_aligned_planets_land_inside_viewport() {
    let clip_from_world = camera_clip_from_world();
    let system = SolarSystem::aligned();

    for &id in BodyId::PLANETS {
        let ndc = project_to_ndc(clip_from_world, system.position(id))
            .unwrap_or_else(|| panic!("{} should be in front of the camera", id.name()));
        assert!(in_unit_square(ndc), "{} projects off screen", id.name());

        let screen = ndc_to_screen(ndc.truncate(), VIEWPORT);
        assert!(screen.x >= 0.0 && screen.x <= VIEWPORT.x);
        assert!(screen.y >= 0.0 && screen.y <= VIEWPORT.y);
    }
}

#[test]
fn test_point_behind_camera_has_no_projection() {
    // Directly behind the starting pose, on the far side of the eye.
    let behind = INITIAL_POSITION * 2.0;
    assert!(project_to_ndc(camera_clip_from_world(), behind).is_none());
}

#[test]
fn test_ndc_quadrants_map_to_screen_quadrants() {
    let upper_right = ndc_to_screen(Vec2::new(0.5, 0.5), VIEWPORT);
    assert!(upper_right.x > VIEWPORT.x / 2.0);
    assert!(upper_right.y < VIEWPORT.y / 2.0);

    let lower_left = ndc_to_screen(Vec2::new(-0.5, -0.5), VIEWPORT);
    assert!(lower_left.x < VIEWPORT.x / 2.0);
    assert!(lower_left.y > VIEWPORT.y / 2.0);
}

#[test]
fn test_screen_and_ndc_mappings_are_inverse() {
    for &ndc in &[
        Vec2::ZERO,
        Vec2::new(0.25, -0.75),
        Vec2::new(-1.0, 1.0),
        Vec2::new(0.9, 0.1),
    ] {
        let round_trip = cursor_to_ndc(ndc_to_screen(ndc, VIEWPORT), VIEWPORT);
        assert!((round_trip - ndc).length() < 1e-5, "{ndc:?} -> {round_trip:?}");
    }
}

// ==== Ray picking ====

#[test]
fn test_center_ray_reaches_the_sun() {
    let eye = INITIAL_POSITION;
    let direction = (Vec3::ZERO - eye).normalize();
    let radius = get_body_params(BodyId::Sun).radius;

    let dist = ray_sphere_intersection(eye, direction, Vec3::ZERO, radius)
        .expect("center ray should hit the sun");

    // Enters the sphere one radius short of the center.
    let expected = eye.length() - radius;
    assert!((dist - expected).abs() < 1e-2);
}

#[test]
fn test_nearest_body_wins_along_shared_ray() {
    // Two spheres stacked along -Z; the closer one must be picked.
    let origin = Vec3::new(0.0, 0.0, 100.0);
    let near = ray_sphere_intersection(origin, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 50.0), 1.0);
    let far = ray_sphere_intersection(origin, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 25.0), 1.0);

    let near = near.expect("near sphere on the ray");
    let far = far.expect("far sphere on the ray");
    assert!(near < far);
}

#[test]
fn test_grazing_ray_outside_radius_misses() {
    let origin = Vec3::new(0.0, 2.01, 100.0);
    assert!(ray_sphere_intersection(origin, Vec3::NEG_Z, Vec3::ZERO, 2.0).is_none());

    // Just inside the radius still counts.
    let origin = Vec3::new(0.0, 1.99, 100.0);
    assert!(ray_sphere_intersection(origin, Vec3::NEG_Z, Vec3::ZERO, 2.0).is_some());
}

#[test]
fn test_planet_sized_targets_are_pickable_from_camera() {
    // Smallest body in the scene, viewed from the starting pose.
    let system = SolarSystem::aligned();
    let center = system.position(BodyId::Mercury);
    let radius = get_body_params(BodyId::Mercury).radius;

    let eye = INITIAL_POSITION;
    let direction = (center - eye).normalize();

    let dist = ray_sphere_intersection(eye, direction, center, radius)
        .expect("ray through the body center should hit");
    assert!(dist > 0.0 && dist < (center - eye).length());
}
