//! Position synchronization between simulation and rendering.
//!
//! Orbital state lives in the [`SolarSystem`] records; render entities only
//! mirror it. Each frame this system looks up every body entity in the
//! registry and writes its computed orbit position into the transform.

use bevy::prelude::*;

use crate::render::bodies::CelestialBody;
use crate::sim::SolarSystem;

/// Sync body render positions from the simulation records.
///
/// Only the translation changes here; rotation belongs to the spin system.
/// Entities missing from the registry are left where they are.
pub fn sync_body_transforms(
    mut query: Query<(Entity, &mut Transform), With<CelestialBody>>,
    system: Res<SolarSystem>,
) {
    for (entity, mut transform) in query.iter_mut() {
        let Some(id) = system.get_id(entity) else {
            continue;
        };

        transform.translation = system.position(id);
    }
}
