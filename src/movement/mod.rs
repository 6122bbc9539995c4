//! Movement domain: waypoint-driven locomotion for platforming agents.

mod components;
mod controller;
mod events;
mod resources;
pub(crate) mod systems;
#[cfg(test)]
mod tests;

pub use components::{Agent, Facing, GameLayer, ManualControl, body_half_extents};
pub use controller::{
    AgentMotionState, BodyReadings, JumpLaunch, LocomotionController, TickOutput, Unreachable,
    choose_jump_launch, steer_direction,
};
pub use events::TravelRequest;
pub use resources::{JumpHeightTable, ManualInput, NavigationTuning, secs_to_duration};

use bevy::prelude::*;

use crate::core::NavigationSet;
use crate::movement::systems::{
    apply_manual_control, apply_travel_requests, click_to_travel, drive_locomotion,
    read_manual_input, toggle_manual_control, update_facing_sprite,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NavigationTuning>()
            .init_resource::<ManualInput>()
            .add_message::<TravelRequest>()
            .add_systems(
                Update,
                (
                    toggle_manual_control,
                    read_manual_input,
                    click_to_travel,
                    apply_travel_requests,
                    update_facing_sprite,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                (drive_locomotion, apply_manual_control).in_set(NavigationSet::Drive),
            );
    }
}
