//! Passthrough domain: dropping through one-way platforms.

mod hooks;
mod state;
mod systems;

pub use hooks::{ONE_WAY_TOLERANCE, PlatformHooks, platform_supports};
pub use state::{DEFAULT_DROP_THROUGH_SECS, PlatformPassthrough};

use bevy::prelude::*;

use crate::core::NavigationSet;
use crate::passthrough::systems::{restore_platform_collisions, track_platform_contacts};

/// A platform the agent can stand on, pass up through, and drop through.
#[derive(Component, Debug, Clone, Copy)]
pub struct OneWayPlatform {
    /// World-space y of the walkable surface.
    pub top: f32,
}

pub struct PassthroughPlugin;

impl Plugin for PassthroughPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            track_platform_contacts.in_set(NavigationSet::Sense),
        )
        .add_systems(
            FixedUpdate,
            restore_platform_collisions.in_set(NavigationSet::Timers),
        );
    }
}
