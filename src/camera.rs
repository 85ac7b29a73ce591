//! Orbit camera for viewing the solar system.
//!
//! Left-drag orbits around the origin, scroll zooms. Input feeds target
//! angles; the applied state chases the targets with damping each frame, so
//! the view keeps gliding briefly after the mouse stops. Camera motion is
//! independent of the animation pause state.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

/// Where the camera starts, looking at the origin.
pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 30.0, 100.0);

/// Vertical field of view in degrees.
pub const FIELD_OF_VIEW_DEGREES: f32 = 75.0;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane distance, generous enough for the star field.
pub const FAR_PLANE: f32 = 1000.0;

/// Closest allowed orbit distance (planetary close-up).
pub const MIN_DISTANCE: f32 = 30.0;

/// Farthest allowed orbit distance (full system plus margin).
pub const MAX_DISTANCE: f32 = 300.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Orbit speed in radians per pixel of mouse motion.
pub const ORBIT_SPEED: f32 = 0.005;

/// Per-frame fraction by which the camera closes in on its targets.
pub const DAMPING: f32 = 0.05;

/// Pitch limit just short of the poles, where look-at would degenerate.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical orbit state around the origin. `yaw`/`pitch`/`distance` are the
/// applied values; the `target_*` fields are where input wants them to be.
#[derive(Resource)]
pub struct CameraState {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_distance: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        let distance = INITIAL_POSITION.length();
        let pitch = (INITIAL_POSITION.y / distance).asin();
        let yaw = INITIAL_POSITION.x.atan2(INITIAL_POSITION.z);
        Self {
            yaw,
            pitch,
            distance,
            target_yaw: yaw,
            target_pitch: pitch,
            target_distance: distance,
        }
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_orbit, camera_zoom, apply_camera_motion).chain(),
            );
    }
}

/// Cartesian position for a spherical orbit state around the origin.
pub fn orbit_position(yaw: f32, pitch: f32, distance: f32) -> Vec3 {
    Vec3::new(
        distance * pitch.cos() * yaw.sin(),
        distance * pitch.sin(),
        distance * pitch.cos() * yaw.cos(),
    )
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FIELD_OF_VIEW_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_translation(INITIAL_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Handle left mouse button drag for orbiting.
fn camera_orbit(
    mut contexts: EguiContexts,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut state: ResMut<CameraState>,
) {
    if !mouse_buttons.pressed(MouseButton::Left) {
        return;
    }
    if mouse_motion.delta == Vec2::ZERO {
        return;
    }

    // Drags that start on the control panel belong to the UI.
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() {
            return;
        }
    }

    state.target_yaw -= mouse_motion.delta.x * ORBIT_SPEED;
    state.target_pitch =
        (state.target_pitch + mouse_motion.delta.y * ORBIT_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mut contexts: EguiContexts,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut state: ResMut<CameraState>,
) {
    // Skip if no scroll input
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    // Scrolling over the panel scrolls the planet list instead.
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() {
            return;
        }
    }

    let zoom_factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
    state.target_distance = (state.target_distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
}

/// Ease the applied orbit state toward its targets and reposition the
/// camera. Runs every frame, paused or not.
fn apply_camera_motion(
    mut state: ResMut<CameraState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    state.yaw = damp(state.yaw, state.target_yaw, DAMPING);
    state.pitch = damp(state.pitch, state.target_pitch, DAMPING);
    state.distance = damp(state.distance, state.target_distance, DAMPING);

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    transform.translation = orbit_position(state.yaw, state.pitch, state.distance);
    transform.look_at(Vec3::ZERO, Vec3::Y);
}

/// Move `current` a fixed fraction of the way toward `target`.
fn damp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
