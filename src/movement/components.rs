//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid ground and obstacles
    Ground,
    /// One-way platforms the agent can stand on and drop through
    Platform,
    /// Navigating agents
    Agent,
}

impl GameLayer {
    /// Everything the agent can stand on or bump its head against.
    pub const WALKABLE: [GameLayer; 2] = [GameLayer::Ground, GameLayer::Platform];
}

/// Marker for an agent driven by the locomotion controller.
#[derive(Component, Debug)]
pub struct Agent;

/// Agent is steered by keyboard instead of its path, for jump calibration.
#[derive(Component, Debug, Default)]
pub struct ManualControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// Half extents of a rectangular collider, with a fallback for other shapes.
pub fn body_half_extents(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => Vec2::new(0.4, 0.45),
    }
}
