//! Movement domain: tuning and input resources.

use std::collections::BTreeMap;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::navigation::JumpTier;

/// Calibrated vertical launch velocities for standing jumps, keyed by tier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct JumpHeightTable(pub BTreeMap<u8, f32>);

impl JumpHeightTable {
    pub fn velocity(&self, tier: JumpTier) -> Option<f32> {
        self.0.get(&tier.get()).copied()
    }
}

impl Default for JumpHeightTable {
    fn default() -> Self {
        // Hand-measured standing jumps at gravity -9.81, one unit per cell.
        Self(BTreeMap::from([
            (1, 5.0),
            (2, 6.75),
            (3, 8.25),
            (4, 9.5),
            (5, 11.25),
        ]))
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationTuning {
    /// Horizontal walking speed, also fed to the ballistic solve.
    pub move_speed: f32,
    /// Horizontal dead zone around the target before the agent stops.
    pub padding: f32,
    /// Distance at which a grounded agent counts a waypoint as reached.
    pub min_target_distance: f32,
    pub ground_check_width: f32,
    pub ground_check_height: f32,
    /// Vertical speed below which a ground contact counts as grounded.
    pub grounded_speed_epsilon: f32,
    pub overhead_probe_distance: f32,
    /// Largest horizontal offset still treated as a standing jump.
    pub standing_jump_max_dx: f32,
    /// A primed standing jump releases once vertical speed falls below this.
    pub priming_release_speed: f32,
    /// Seconds after a jump before checking whether the agent got stuck.
    pub recalibrate_after: f32,
    /// How far below the end goal a recalibrated path is aimed.
    pub recalibrate_drop: f32,
    /// Seconds a dropped-through platform stays non-solid.
    pub drop_through_duration: f32,
    pub jump_heights: JumpHeightTable,
    pub manual_jump_velocity: f32,
    /// Clicked ground points are shifted down by this much before travel.
    pub click_drop_offset: f32,
}

impl Default for NavigationTuning {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            padding: 0.1,
            min_target_distance: 0.5,
            ground_check_width: 0.6,
            ground_check_height: 0.2,
            grounded_speed_epsilon: 0.05,
            overhead_probe_distance: 0.5,
            standing_jump_max_dx: 1.0,
            priming_release_speed: 5.5,
            recalibrate_after: 5.0,
            recalibrate_drop: 1.0,
            drop_through_duration: 0.35,
            jump_heights: JumpHeightTable::default(),
            manual_jump_velocity: 8.0,
            click_drop_offset: 0.3,
        }
    }
}

impl NavigationTuning {
    /// Ground contact only counts while vertical speed is near zero, so an
    /// agent decelerating at the top of an arc next to a ledge is not grounded.
    pub fn is_grounded(&self, ground_contact: bool, vertical_speed: f32) -> bool {
        ground_contact && vertical_speed.abs() <= self.grounded_speed_epsilon
    }

    pub fn recalibrate_delay(&self) -> Duration {
        secs_to_duration(self.recalibrate_after)
    }

    pub fn drop_through_delay(&self) -> Duration {
        secs_to_duration(self.drop_through_duration)
    }
}

/// Negative and NaN clamp to zero, values too large for a `Duration` saturate.
pub fn secs_to_duration(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or(Duration::MAX)
}

/// Keyboard state for manual control, sampled every frame.
#[derive(Resource, Debug, Default)]
pub struct ManualInput {
    pub axis: f32,
    /// Latched until the next fixed tick consumes it.
    pub jump_requested: bool,
    /// `S` + `Space`: drop through the platform underfoot.
    pub drop_requested: bool,
}
