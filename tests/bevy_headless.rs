//! Headless integration tests for the animation systems.
//!
//! These run the real motion plugin inside a minimal Bevy app (no window,
//! no rendering) and check the pause and speed semantics end to end.

mod common;

use bevy::prelude::*;

use common::{collect_angles, create_motion_app, run_frames};
use orrery::bodies::BodyId;
use orrery::motion::Spin;
use orrery::sim::SolarSystem;
use orrery::types::AnimationState;

/// Spawn a bare spinning entity, the way render bodies carry their spin.
fn spawn_spinner(app: &mut App, rate: f32) -> Entity {
    app.world_mut()
        .spawn((Spin { rate }, Transform::default()))
        .id()
}

fn spinner_rotation(app: &App, entity: Entity) -> Quat {
    app.world()
        .entity(entity)
        .get::<Transform>()
        .expect("spinner should have a transform")
        .rotation
}

#[test]
fn test_planets_revolve_over_time() {
    let mut app = create_motion_app();
    run_frames(&mut app, 5);

    let system = app.world().resource::<SolarSystem>();
    for &id in BodyId::PLANETS {
        assert!(
            system.angle(id) > 0.0,
            "{} should have advanced",
            id.name()
        );
    }
    // The sun has no orbit to advance along.
    assert_eq!(system.angle(BodyId::Sun), 0.0);
}

#[test]
fn test_pause_freezes_revolution_and_spin() {
    let mut app = create_motion_app();
    let spinner = spawn_spinner(&mut app, 0.6);

    app.world_mut().resource_mut::<AnimationState>().paused = true;

    let angles_before = collect_angles(&app);
    let rotation_before = spinner_rotation(&app, spinner);

    run_frames(&mut app, 5);

    // Nothing may move while paused, bit for bit.
    assert_eq!(collect_angles(&app), angles_before);
    assert_eq!(spinner_rotation(&app, spinner), rotation_before);
}

#[test]
fn test_resume_continues_from_frozen_state() {
    let mut app = create_motion_app();

    run_frames(&mut app, 3);
    let angles_mid = collect_angles(&app);

    app.world_mut().resource_mut::<AnimationState>().paused = true;
    run_frames(&mut app, 3);
    assert_eq!(collect_angles(&app), angles_mid);

    app.world_mut().resource_mut::<AnimationState>().paused = false;
    run_frames(&mut app, 3);

    let system = app.world().resource::<SolarSystem>();
    for (i, &id) in BodyId::PLANETS.iter().enumerate() {
        assert!(
            system.angle(id) > angles_mid[i + 1],
            "{} should pick up where it stopped",
            id.name()
        );
    }
}

#[test]
fn test_zero_speed_halts_only_that_body() {
    let mut app = create_motion_app();
    app.world_mut()
        .resource_mut::<SolarSystem>()
        .set_speed(BodyId::Mercury, 0.0);

    run_frames(&mut app, 5);

    let system = app.world().resource::<SolarSystem>();
    assert_eq!(system.angle(BodyId::Mercury), 0.0);
    for &id in BodyId::PLANETS {
        if id != BodyId::Mercury {
            assert!(system.angle(id) > 0.0, "{} should keep moving", id.name());
        }
    }
}

#[test]
fn test_global_zero_stops_revolution_but_not_spin() {
    let mut app = create_motion_app();
    let spinner = spawn_spinner(&mut app, 0.6);

    app.world_mut()
        .resource_mut::<AnimationState>()
        .global_speed = 0.0;

    run_frames(&mut app, 5);

    let system = app.world().resource::<SolarSystem>();
    for &id in BodyId::PLANETS {
        assert_eq!(system.angle(id), 0.0, "{} revolved anyway", id.name());
    }

    // Spin is deliberately outside the global multiplier's reach.
    assert_ne!(spinner_rotation(&app, spinner), Quat::IDENTITY);
}

#[test]
fn test_angles_accumulate_monotonically() {
    let mut app = create_motion_app();

    let mut previous = collect_angles(&app);
    for _ in 0..4 {
        run_frames(&mut app, 2);
        let current = collect_angles(&app);
        for (i, &id) in BodyId::ALL.iter().enumerate() {
            assert!(
                current[i] >= previous[i],
                "{} angle moved backwards",
                id.name()
            );
        }
        previous = current;
    }
}

#[test]
fn test_registry_links_live_entities() {
    let mut app = create_motion_app();

    let entity = app.world_mut().spawn(Transform::default()).id();
    let mut system = app.world_mut().resource_mut::<SolarSystem>();
    system.register(entity, BodyId::Jupiter);

    assert_eq!(system.get_entity(BodyId::Jupiter), Some(entity));
    assert_eq!(system.get_id(entity), Some(BodyId::Jupiter));
    assert_eq!(system.get_entity(BodyId::Saturn), None);
}
