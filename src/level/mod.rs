//! Level domain: level geometry, the navigating agent, and idle wandering.

mod spawn;
mod wander;

pub use spawn::{build_route_pathfinder, level_center};
pub use wander::{MIN_WANDER_DISTANCE, WanderState, Wanderer};

use bevy::prelude::*;

use crate::level::spawn::{frame_camera, install_pathfinder, spawn_level};
use crate::level::wander::wander_when_idle;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (install_pathfinder, spawn_level))
            .add_systems(PostStartup, frame_camera)
            .add_systems(Update, wander_when_idle);
    }
}
