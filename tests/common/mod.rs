//! Common test utilities for integration tests.

use bevy::prelude::*;

use orrery::bodies::BodyId;
use orrery::motion::MotionPlugin;
use orrery::sim::SolarSystem;
use orrery::types::AnimationState;

/// Minimal headless app: schedules and time, no windowing or rendering.
pub fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Headless app running the real motion systems over an aligned system.
pub fn create_motion_app() -> App {
    let mut app = create_minimal_app();
    app.insert_resource(SolarSystem::aligned())
        .insert_resource(AnimationState::default())
        .add_plugins(MotionPlugin);
    app
}

/// Snapshot of every body's orbital angle, in table order.
pub fn collect_angles(app: &App) -> Vec<f32> {
    let system = app.world().resource::<SolarSystem>();
    BodyId::ALL.iter().map(|&id| system.angle(id)).collect()
}

/// Run `frames` updates with a small real-time gap between them, so the
/// `Time` resource sees a nonzero delta each frame.
pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        std::thread::sleep(std::time::Duration::from_millis(2));
        app.update();
    }
}
