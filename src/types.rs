//! Shared animation state and schedule phases.

use bevy::prelude::*;

/// Scaling applied to orbital angular motion. Slider values live in a
/// readable 0-3 range, so the integrator knocks them down to an on-screen
/// pace measured in radians per second.
pub const REVOLUTION_FACTOR: f32 = 0.1;

/// Lower bound of every speed slider.
pub const SPEED_MIN: f32 = 0.0;

/// Upper bound of every speed slider.
pub const SPEED_MAX: f32 = 3.0;

/// Slider step granularity, matching the one-decimal readouts.
pub const SPEED_STEP: f32 = 0.1;

/// Update-schedule phases for the animation pipeline.
///
/// Orbital state advances first, render transforms are synced from it, and
/// pointer picking runs against the synced positions so hover feedback never
/// lags a frame behind the bodies it points at.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateSet {
    /// Advance orbital angles and body spin.
    Motion,
    /// Copy simulation positions onto render transforms.
    Sync,
    /// Pointer picking and hover feedback.
    Hover,
}

/// Global animation controls shared by the input, UI, and motion systems.
#[derive(Resource, Clone, Debug)]
pub struct AnimationState {
    /// When set, orbital revolution and body spin both freeze.
    pub paused: bool,
    /// Multiplier applied on top of each body's own speed setting.
    pub global_speed: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            paused: false,
            global_speed: 1.0,
        }
    }
}

impl AnimationState {
    /// Flip between paused and running.
    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }
}
