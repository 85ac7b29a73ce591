//! Frame-by-frame animation of the solar system.
//!
//! Two motions run here: revolution (orbital angles in the [`SolarSystem`]
//! records) and spin (self-rotation of render entities carrying [`Spin`]).
//! Pausing freezes both. The global speed multiplier scales revolution only,
//! so a system stopped with the global slider still shows spinning bodies.

use bevy::prelude::*;

use crate::bodies::BodyId;
use crate::sim::SolarSystem;
use crate::types::{AnimationState, UpdateSet};

/// Self-rotation rate in radians per second around the local Y axis.
///
/// Attached to render entities at spawn. Children carrying their own `Spin`
/// compose with their parent's rotation, which is how the sun's glow shell
/// drifts relative to the sun itself.
#[derive(Component, Clone, Copy, Debug)]
pub struct Spin {
    pub rate: f32,
}

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (UpdateSet::Motion, UpdateSet::Sync, UpdateSet::Hover).chain(),
        )
        .add_systems(
            Update,
            (advance_orbits, apply_spin).in_set(UpdateSet::Motion),
        );
    }
}

/// Advance every planet's orbital angle. The sun's record never moves.
fn advance_orbits(
    state: Res<AnimationState>,
    time: Res<Time>,
    mut system: ResMut<SolarSystem>,
) {
    if state.paused {
        return;
    }

    let delta = time.delta_secs();
    for &id in BodyId::PLANETS {
        system.record_mut(id).advance(delta, state.global_speed);
    }
}

/// Rotate spinning entities about their local Y axis. Unlike revolution,
/// spin ignores the global speed multiplier.
fn apply_spin(
    state: Res<AnimationState>,
    time: Res<Time>,
    mut query: Query<(&Spin, &mut Transform)>,
) {
    if state.paused {
        return;
    }

    let delta = time.delta_secs();
    for (spin, mut transform) in query.iter_mut() {
        transform.rotate_y(spin.rate * delta);
    }
}
