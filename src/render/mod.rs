//! Rendering systems for the solar system animation.
//!
//! This module owns the visual scene: body meshes, the star field, orbit
//! paths, hover feedback, and floating labels.

mod background;
pub mod bodies;
pub mod highlight;
pub mod labels;
mod orbits;
mod sync;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::CelestialBodyPlugin;
use self::highlight::HighlightPlugin;
use self::labels::LabelPlugin;
use self::orbits::OrbitPathPlugin;
use self::sync::sync_body_transforms;

use crate::types::UpdateSet;

// Re-export for use in other modules
pub use self::bodies::CelestialBody;
pub use self::highlight::HoveredBody;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CelestialBodyPlugin,
            BackgroundPlugin,
            OrbitPathPlugin,
            HighlightPlugin,
            LabelPlugin,
        ))
        // Transform sync runs in the Sync phase, after motion has advanced
        // the orbital records and before hover picking reads positions.
        .add_systems(Update, sync_body_transforms.in_set(UpdateSet::Sync));
    }
}
