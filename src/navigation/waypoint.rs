//! Navigation domain: waypoints, grid cells, and intent tags.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Raw tag reported for "no active target".
pub const NO_TARGET_TAG: i32 = -1;
/// Raw tag for a plain ground waypoint.
pub const WALK_TAG: i32 = 0;
/// Raw tag for a drop-through waypoint.
pub const DROP_TAG: i32 = -2;

/// Discrete jump-height tier carried by a jump waypoint (1..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JumpTier(u8);

impl JumpTier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(tier: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&tier).then_some(Self(tier))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every tier, lowest first.
    pub fn all() -> impl Iterator<Item = JumpTier> {
        (Self::MIN..=Self::MAX).map(JumpTier)
    }
}

/// A waypoint tag that does not decode to any intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTag(pub i32);

impl std::fmt::Display for InvalidTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "waypoint tag {} is not a walk, jump tier or drop tag", self.0)
    }
}

/// What the agent should do when a waypoint becomes its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaypointIntent {
    Walk,
    Jump(JumpTier),
    Drop,
}

impl WaypointIntent {
    /// Decode a raw tag. The "no target" tag is not a waypoint and is rejected.
    pub fn from_tag(tag: i32) -> Result<Self, InvalidTag> {
        match tag {
            WALK_TAG => Ok(Self::Walk),
            DROP_TAG => Ok(Self::Drop),
            t if t > 0 => u8::try_from(t)
                .ok()
                .and_then(JumpTier::new)
                .map(Self::Jump)
                .ok_or(InvalidTag(tag)),
            _ => Err(InvalidTag(tag)),
        }
    }

    pub fn tag(self) -> i32 {
        match self {
            Self::Walk => WALK_TAG,
            Self::Jump(tier) => i32::from(tier.get()),
            Self::Drop => DROP_TAG,
        }
    }
}

/// One step of a path: the world-space center of a path cell plus its intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub position: Vec2,
    pub intent: WaypointIntent,
}

impl Waypoint {
    pub fn new(position: Vec2, intent: WaypointIntent) -> Self {
        Self { position, intent }
    }

    pub fn walk(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), WaypointIntent::Walk)
    }

    pub fn jump(x: f32, y: f32, tier: JumpTier) -> Self {
        Self::new(Vec2::new(x, y), WaypointIntent::Jump(tier))
    }

    pub fn drop_through(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), WaypointIntent::Drop)
    }

    /// Build from the `(x, y, tag)` interchange form.
    pub fn from_tagged(x: f32, y: f32, tag: i32) -> Result<Self, InvalidTag> {
        Ok(Self::new(Vec2::new(x, y), WaypointIntent::from_tag(tag)?))
    }
}

/// Raw tag of an optional target, `-1` when there is none.
pub fn target_tag(target: Option<&Waypoint>) -> i32 {
    target.map_or(NO_TARGET_TAG, |w| w.intent.tag())
}

/// A discrete path cell as produced by a pathfinder, tag included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub tag: i32,
}

impl GridCell {
    pub fn new(x: i32, y: i32, tag: i32) -> Self {
        Self { x, y, tag }
    }
}
