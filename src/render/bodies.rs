//! Celestial body rendering and spawning.
//!
//! Builds the sun (with its glow shell), the eight planets, and the rings on
//! the outer four. Spawned entities are linked to their simulation records
//! through the [`SolarSystem`] registry.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::bodies::{BodyId, RING_INNER_SCALE, get_body_params};
use crate::motion::Spin;
use crate::sim::SolarSystem;

/// Sun self-rotation in radians per second.
pub const SUN_SPIN_RATE: f32 = 0.3;

/// Glow shell rotation in radians per second, relative to the sun.
pub const GLOW_SPIN_RATE: f32 = 0.12;

/// Planet self-rotation in radians per second, shared by all planets.
pub const PLANET_SPIN_RATE: f32 = 0.6;

/// Glow shell radius in scene units, slightly larger than the sun.
const GLOW_RADIUS: f32 = 5.5;

const GLOW_ALPHA: f32 = 0.3;
const RING_ALPHA: f32 = 0.7;

/// Radial resolution of the ring annulus meshes.
const RING_SEGMENTS: u32 = 64;

/// Marker for entities whose transform follows a [`SolarSystem`] record.
///
/// Which record an entity follows is resolved through the registry, not
/// stored here. Children (glow shell, rings) carry no marker and follow
/// their parent through the transform hierarchy.
#[derive(Component)]
pub struct CelestialBody;

/// Plugin providing celestial body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system);
    }
}

/// Spawn the sun, the planets, and their attached rings.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut system: ResMut<SolarSystem>,
) {
    spawn_sun(&mut commands, &mut meshes, &mut materials, &mut system);

    for &id in BodyId::PLANETS {
        let params = get_body_params(id);

        let mesh = meshes.add(Sphere::new(params.radius).mesh().uv(32, 32));
        let material = materials.add(StandardMaterial {
            base_color: params.color,
            ..default()
        });

        let entity = commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_translation(system.position(id)),
                CelestialBody,
                Spin {
                    rate: PLANET_SPIN_RATE,
                },
            ))
            .id();

        if let Some(ring) = params.ring {
            let ring_mesh = meshes.add(
                Annulus::new(params.radius * RING_INNER_SCALE, params.radius * ring.outer_scale)
                    .mesh()
                    .resolution(RING_SEGMENTS),
            );
            let ring_material = materials.add(StandardMaterial {
                base_color: ring.color.with_alpha(RING_ALPHA),
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                ..default()
            });

            // The annulus lies in the XY plane; tip it into the orbital
            // plane. As a child it revolves and spins with its planet.
            commands.entity(entity).with_children(|parent| {
                parent.spawn((
                    Mesh3d(ring_mesh),
                    MeshMaterial3d(ring_material),
                    Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                ));
            });
        }

        system.register(entity, id);
    }

    info!("Spawned sun and {} planets", BodyId::PLANETS.len());
}

/// Spawn the sun with an emissive surface and a translucent glow shell.
/// The shell has its own spin, so it drifts relative to the surface.
fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    system: &mut SolarSystem,
) {
    let params = get_body_params(BodyId::Sun);

    let mesh = meshes.add(Sphere::new(params.radius).mesh().uv(32, 32));
    let material = materials.add(StandardMaterial {
        base_color: params.color,
        emissive: params.color.to_linear() * 2.0,
        ..default()
    });

    let glow_mesh = meshes.add(Sphere::new(GLOW_RADIUS).mesh().uv(32, 32));
    let glow_material = materials.add(StandardMaterial {
        base_color: params.color.with_alpha(GLOW_ALPHA),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let entity = commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::default(),
            CelestialBody,
            Spin {
                rate: SUN_SPIN_RATE,
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(glow_mesh),
                MeshMaterial3d(glow_material),
                Transform::default(),
                Spin {
                    rate: GLOW_SPIN_RATE,
                },
            ));
        })
        .id();

    system.register(entity, BodyId::Sun);
}
