//! Background rendering for the solar system animation.
//!
//! Provides the star field and scene lighting.

use bevy::prelude::*;
use rand::Rng;

/// Number of stars scattered around the scene.
const STAR_COUNT: usize = 5000;

/// Stars are placed uniformly inside a cube of twice this half-extent,
/// centered on the origin. Far enough out that orbiting the camera never
/// reveals the cube's edges.
const STAR_FIELD_HALF_EXTENT: f32 = 1000.0;

const STAR_RADIUS: f32 = 0.6;
const STAR_ALPHA: f32 = 0.8;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Spawn the star field with randomly placed stars.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Slightly translucent white, self-lit so the stars ignore the sun.
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(STAR_ALPHA),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    // Low-poly sphere shared by every star.
    let star_mesh = meshes.add(Sphere::new(STAR_RADIUS).mesh().uv(8, 6));

    let mut rng = rand::thread_rng();

    for _ in 0..STAR_COUNT {
        let x = rng.gen_range(-STAR_FIELD_HALF_EXTENT..STAR_FIELD_HALF_EXTENT);
        let y = rng.gen_range(-STAR_FIELD_HALF_EXTENT..STAR_FIELD_HALF_EXTENT);
        let z = rng.gen_range(-STAR_FIELD_HALF_EXTENT..STAR_FIELD_HALF_EXTENT);
        let scale = rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_xyz(x, y, z).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {} background stars", STAR_COUNT);
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // Dim gray ambient so night sides stay visible
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(64, 64, 64),
        brightness: 300.0,
        ..default()
    });

    // Sunlight radiates from the origin, where the sun sits
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 50_000_000.0,
            range: 200.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::default(),
    ));

    info!("Scene lighting initialized");
}
