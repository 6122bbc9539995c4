//! Passthrough domain: collision hooks for one-way platforms.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::movement::body_half_extents;
use crate::passthrough::{OneWayPlatform, PlatformPassthrough};

/// How far below a platform's top the agent's feet may be and still collide.
pub const ONE_WAY_TOLERANCE: f32 = 0.1;

/// A platform only holds an agent whose feet are at or above its surface.
pub fn platform_supports(platform_top: f32, agent_bottom: f32) -> bool {
    agent_bottom >= platform_top - ONE_WAY_TOLERANCE
}

/// Disables agent/platform contacts every physics step.
///
/// A contact is ignored while the agent has that platform suppressed for a
/// drop-through, or while the agent is below the platform's surface (rising
/// through it from underneath). This runs per step on existing contacts, so a
/// platform the agent is already resting on lets go immediately.
#[derive(SystemParam)]
pub struct PlatformHooks<'w, 's> {
    agents: Query<'w, 's, (&'static PlatformPassthrough, &'static Position, &'static Collider)>,
    platforms: Query<'w, 's, &'static OneWayPlatform>,
}

impl PlatformHooks<'_, '_> {
    /// `None` when the pair is not an agent and a one-way platform.
    fn platform_contact_enabled(&self, collider1: Entity, collider2: Entity) -> Option<bool> {
        for (agent, other) in [(collider1, collider2), (collider2, collider1)] {
            let Ok(platform) = self.platforms.get(other) else {
                continue;
            };
            let Ok((passthrough, position, collider)) = self.agents.get(agent) else {
                continue;
            };

            if passthrough.is_suppressed(other) {
                return Some(false);
            }
            let agent_bottom = position.y - body_half_extents(collider).y;
            return Some(platform_supports(platform.top, agent_bottom));
        }
        None
    }
}

impl CollisionHooks for PlatformHooks<'_, '_> {
    fn modify_contacts(&self, contacts: &mut ContactPair, _commands: &mut Commands) -> bool {
        self.platform_contact_enabled(contacts.collider1, contacts.collider2)
            .unwrap_or(true)
    }
}
