//! Static catalog of the rendered solar system.
//!
//! Sizes, distances, and speeds are display-tuned rather than astronomical:
//! the goal is a legible animation, not an ephemeris.

use bevy::prelude::*;

/// Identifies a body in the system. Doubles as the index into the
/// per-body simulation records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    /// Every body, in table order. Indexing invariant: `ALL[i].index() == i`.
    pub const ALL: &'static [BodyId] = &[
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// The orbiting bodies, sun excluded.
    pub const PLANETS: &'static [BodyId] = &[
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Display name for labels and control rows.
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
        }
    }

    /// Position of this body in [`BodyId::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Ring description for the gas and ice giants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingParams {
    pub color: Color,
    /// Outer radius as a multiple of the body radius.
    pub outer_scale: f32,
}

/// Inner ring radius as a multiple of the body radius, shared by all
/// ringed planets.
pub const RING_INNER_SCALE: f32 = 1.2;

/// Render and animation parameters for one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyParams {
    pub id: BodyId,
    pub color: Color,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Orbital radius in scene units. Zero for the sun.
    pub distance: f32,
    /// Initial value of the body's speed setting.
    pub base_speed: f32,
    pub ring: Option<RingParams>,
}

/// Look up the display parameters for a body.
pub fn get_body_params(id: BodyId) -> BodyParams {
    match id {
        BodyId::Sun => BodyParams {
            id,
            color: Color::srgb_u8(0xff, 0xff, 0x00),
            radius: 5.0,
            distance: 0.0,
            base_speed: 0.0,
            ring: None,
        },
        BodyId::Mercury => BodyParams {
            id,
            color: Color::srgb_u8(0x8c, 0x8c, 0x8c),
            radius: 0.4,
            distance: 15.0,
            base_speed: 1.6,
            ring: None,
        },
        BodyId::Venus => BodyParams {
            id,
            color: Color::srgb_u8(0xe6, 0xc2, 0x29),
            radius: 0.6,
            distance: 20.0,
            base_speed: 1.2,
            ring: None,
        },
        BodyId::Earth => BodyParams {
            id,
            color: Color::srgb_u8(0x34, 0x98, 0xdb),
            radius: 0.6,
            distance: 25.0,
            base_speed: 1.0,
            ring: None,
        },
        BodyId::Mars => BodyParams {
            id,
            color: Color::srgb_u8(0xe7, 0x4c, 0x3c),
            radius: 0.5,
            distance: 30.0,
            base_speed: 0.8,
            ring: None,
        },
        BodyId::Jupiter => BodyParams {
            id,
            color: Color::srgb_u8(0xf3, 0x9c, 0x12),
            radius: 1.2,
            distance: 40.0,
            base_speed: 0.4,
            ring: Some(RingParams {
                color: Color::srgb_u8(0xc2, 0xb2, 0x80),
                outer_scale: 1.5,
            }),
        },
        BodyId::Saturn => BodyParams {
            id,
            color: Color::srgb_u8(0xf1, 0xc4, 0x0f),
            radius: 1.0,
            distance: 50.0,
            base_speed: 0.3,
            ring: Some(RingParams {
                color: Color::srgb_u8(0xc2, 0xb2, 0x80),
                outer_scale: 2.0,
            }),
        },
        BodyId::Uranus => BodyParams {
            id,
            color: Color::srgb_u8(0x1a, 0xbc, 0x9c),
            radius: 0.8,
            distance: 60.0,
            base_speed: 0.2,
            ring: Some(RingParams {
                color: Color::srgb_u8(0x88, 0xaa, 0xdd),
                outer_scale: 1.3,
            }),
        },
        BodyId::Neptune => BodyParams {
            id,
            color: Color::srgb_u8(0x29, 0x80, 0xb9),
            radius: 0.8,
            distance: 70.0,
            base_speed: 0.15,
            ring: Some(RingParams {
                color: Color::srgb_u8(0x55, 0x99, 0xcc),
                outer_scale: 1.3,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_bodies() {
        assert_eq!(BodyId::ALL.len(), 9);
        assert_eq!(BodyId::PLANETS.len(), 8);
        for &id in BodyId::ALL {
            // Every id resolves to params for itself.
            assert_eq!(get_body_params(id).id, id);
        }
    }

    #[test]
    fn test_index_matches_table_order() {
        for (i, &id) in BodyId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i, "{} out of order", id.name());
        }
    }

    #[test]
    fn test_sun_is_stationary() {
        let sun = get_body_params(BodyId::Sun);
        assert_eq!(sun.distance, 0.0);
        assert_eq!(sun.base_speed, 0.0);
        assert!(sun.ring.is_none());
    }

    #[test]
    fn test_planets_orbit_at_increasing_distance() {
        let mut previous = 0.0;
        for &id in BodyId::PLANETS {
            let params = get_body_params(id);
            assert!(
                params.distance > previous,
                "{} should orbit farther out than its inner neighbor",
                id.name()
            );
            previous = params.distance;
        }
    }

    #[test]
    fn test_outer_planets_are_slower() {
        let mut previous = f32::INFINITY;
        for &id in BodyId::PLANETS {
            let params = get_body_params(id);
            assert!(
                params.base_speed < previous,
                "{} should revolve slower than its inner neighbor",
                id.name()
            );
            assert!(params.base_speed > 0.0, "{} must start moving", id.name());
            previous = params.base_speed;
        }
    }

    #[test]
    fn test_ring_geometry_is_valid() {
        for &id in BodyId::ALL {
            if let Some(ring) = get_body_params(id).ring {
                assert!(
                    ring.outer_scale > RING_INNER_SCALE,
                    "{} ring would be inside out",
                    id.name()
                );
            }
        }
    }

    #[test]
    fn test_only_outer_planets_have_rings() {
        let ringed: Vec<&str> = BodyId::ALL
            .iter()
            .filter(|&&id| get_body_params(id).ring.is_some())
            .map(|id| id.name())
            .collect();
        assert_eq!(ringed, ["Jupiter", "Saturn", "Uranus", "Neptune"]);
    }
}
