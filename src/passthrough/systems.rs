//! Passthrough domain: collision-layer wiring and restore timers.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::passthrough::{OneWayPlatform, PlatformPassthrough};

/// Feeds platform contact begin/end into each agent's passthrough state.
pub(crate) fn track_platform_contacts(
    mut collision_start: MessageReader<CollisionStart>,
    mut collision_end: MessageReader<CollisionEnd>,
    platforms: Query<(), With<OneWayPlatform>>,
    mut agents: Query<&mut PlatformPassthrough>,
) {
    for event in collision_start.read() {
        for (agent, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            if platforms.get(other).is_err() {
                continue;
            }
            if let Ok(mut passthrough) = agents.get_mut(agent) {
                debug!("[PLATFORM] {:?} landed on platform {:?}", agent, other);
                passthrough.on_grounded_on(other);
            }
        }
    }

    for event in collision_end.read() {
        for (agent, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            if platforms.get(other).is_err() {
                continue;
            }
            if let Ok(mut passthrough) = agents.get_mut(agent) {
                debug!("[PLATFORM] {:?} left platform {:?}", agent, other);
                passthrough.on_left_platform(other);
            }
        }
    }
}

/// Closes expired suppression windows so the platforms turn solid again.
pub(crate) fn restore_platform_collisions(
    time: Res<Time>,
    mut agents: Query<(Entity, &mut PlatformPassthrough)>,
) {
    for (agent, mut passthrough) in &mut agents {
        for platform in passthrough.tick(time.delta()) {
            info!(
                "[PLATFORM] Collision restored between {:?} and platform {:?}",
                agent, platform
            );
        }
    }
}
