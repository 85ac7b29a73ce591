//! Simulation state for the orbiting bodies.
//!
//! All orbital state lives in the [`SolarSystem`] resource as plain records
//! indexed by [`BodyId`]. Render entities hold no orbital data of their own;
//! they are linked to their records through the entity registry and receive
//! positions via the sync system each frame.

use std::collections::HashMap;
use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::bodies::{BodyId, get_body_params};
use crate::types::{REVOLUTION_FACTOR, SPEED_MAX, SPEED_MIN};

/// Orbital state of a single body.
#[derive(Clone, Copy, Debug)]
pub struct BodyRecord {
    /// Current angle along the orbit in radians, unbounded.
    pub angle: f32,
    /// The body's own speed setting (the per-body slider value).
    pub current_speed: f32,
}

impl BodyRecord {
    /// Advance the orbital angle by one step.
    ///
    /// `global_speed` is the system-wide multiplier; the step is further
    /// scaled by [`REVOLUTION_FACTOR`] to keep slider values in a readable
    /// range. A zero in either factor leaves the angle untouched.
    pub fn advance(&mut self, delta_secs: f32, global_speed: f32) {
        self.angle += self.current_speed * delta_secs * global_speed * REVOLUTION_FACTOR;
    }
}

/// Per-body orbital records plus the registry linking them to render
/// entities.
#[derive(Resource)]
pub struct SolarSystem {
    records: [BodyRecord; BodyId::ALL.len()],
    entity_to_id: HashMap<Entity, BodyId>,
    id_to_entity: HashMap<BodyId, Entity>,
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarSystem {
    /// Build a system with randomized orbital phases, so the planets do not
    /// start lined up along one axis. The sun stays at angle zero.
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        Self::with_phases(|id| match id {
            BodyId::Sun => 0.0,
            _ => rng.gen_range(0.0..TAU),
        })
    }

    /// Build a system with every body at angle zero, on the +X axis.
    /// Deterministic variant for tests.
    pub fn aligned() -> Self {
        Self::with_phases(|_| 0.0)
    }

    fn with_phases(mut phase: impl FnMut(BodyId) -> f32) -> Self {
        let records = std::array::from_fn(|i| {
            let id = BodyId::ALL[i];
            BodyRecord {
                angle: phase(id),
                current_speed: get_body_params(id).base_speed,
            }
        });
        Self {
            records,
            entity_to_id: HashMap::new(),
            id_to_entity: HashMap::new(),
        }
    }

    /// Link a spawned render entity to its body record.
    pub fn register(&mut self, entity: Entity, id: BodyId) {
        self.entity_to_id.insert(entity, id);
        self.id_to_entity.insert(id, entity);
    }

    /// Render entity for a body, if one has been registered.
    pub fn get_entity(&self, id: BodyId) -> Option<Entity> {
        self.id_to_entity.get(&id).copied()
    }

    /// Body behind a render entity, if the entity is registered.
    pub fn get_id(&self, entity: Entity) -> Option<BodyId> {
        self.entity_to_id.get(&entity).copied()
    }

    pub fn record(&self, id: BodyId) -> &BodyRecord {
        &self.records[id.index()]
    }

    pub fn record_mut(&mut self, id: BodyId) -> &mut BodyRecord {
        &mut self.records[id.index()]
    }

    pub fn angle(&self, id: BodyId) -> f32 {
        self.records[id.index()].angle
    }

    pub fn speed(&self, id: BodyId) -> f32 {
        self.records[id.index()].current_speed
    }

    /// Set a body's speed, clamped to the slider range.
    pub fn set_speed(&mut self, id: BodyId, speed: f32) {
        self.records[id.index()].current_speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// World position of a body on its orbit. Bodies all orbit in the XZ
    /// plane around the origin; the sun sits at the origin itself.
    pub fn position(&self, id: BodyId) -> Vec3 {
        let distance = get_body_params(id).distance;
        if distance <= 0.0 {
            return Vec3::ZERO;
        }
        let angle = self.records[id.index()].angle;
        Vec3::new(distance * angle.cos(), 0.0, distance * angle.sin())
    }
}
