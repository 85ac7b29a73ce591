//! Orrery - Interactive Solar System Animation
//!
//! A desktop toy solar system: eight planets on circular orbits around an
//! emissive sun, with per-planet speed controls, hover labels, and an orbit
//! camera.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod bodies;
mod camera;
mod input;
mod motion;
mod render;
mod sim;
mod types;
mod ui;

use camera::CameraPlugin;
use input::InputPlugin;
use motion::MotionPlugin;
use render::RenderPlugin;
use sim::SolarSystem;
use types::AnimationState;
use ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SolarSystem::default())
        .insert_resource(AnimationState::default())
        // Add simulation plugins
        .add_plugins((CameraPlugin, MotionPlugin, RenderPlugin, InputPlugin, UiPlugin))
        .run();
}
