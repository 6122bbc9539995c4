//! Movement domain: travel requests and the per-tick controller drive.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::systems::collisions::sense_body;
use crate::movement::{Agent, LocomotionController, ManualControl, NavigationTuning, TravelRequest};
use crate::navigation::ActivePathfinder;
use crate::passthrough::PlatformPassthrough;

/// Turn travel requests into fresh paths. Unreachable destinations are
/// reported once and otherwise ignored.
pub(crate) fn apply_travel_requests(
    mut requests: MessageReader<TravelRequest>,
    pathfinder: Res<ActivePathfinder>,
    mut agents: Query<(&Transform, &mut LocomotionController), With<Agent>>,
) {
    for request in requests.read() {
        let Ok((transform, mut controller)) = agents.get_mut(request.agent) else {
            warn!("[NAV] Travel request for unknown agent {:?}", request.agent);
            continue;
        };

        let from = transform.translation.truncate();
        match controller.travel(from, request.destination, pathfinder.get()) {
            Ok(waypoints) => info!(
                "[NAV] {:?} travelling to {} via {} waypoints",
                request.agent, request.destination, waypoints
            ),
            Err(unreachable) => info!("[NAV] {}", unreachable),
        }
    }
}

/// Run every automated agent's controller for one fixed step.
pub(crate) fn drive_locomotion(
    time: Res<Time>,
    tuning: Res<NavigationTuning>,
    pathfinder: Res<ActivePathfinder>,
    gravity: Res<Gravity>,
    spatial_query: SpatialQuery,
    mut agents: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &mut LinearVelocity,
            &mut LocomotionController,
            &mut PlatformPassthrough,
        ),
        (With<Agent>, Without<ManualControl>),
    >,
) {
    for (agent, transform, collider, mut velocity, mut controller, mut passthrough) in &mut agents
    {
        let readings = sense_body(
            &spatial_query,
            transform,
            collider,
            velocity.0,
            &passthrough,
            &tuning,
            gravity.0.y,
        );

        let output = controller.tick(&readings, &tuning, pathfinder.get(), time.delta());
        velocity.0 = output.velocity;

        if output.drop_through {
            match passthrough.drop_through_current_platform() {
                Some(platform) => {
                    info!("[PLATFORM] {:?} dropping through {:?}", agent, platform)
                }
                None => debug!("[PLATFORM] {:?} asked to drop with no platform underfoot", agent),
            }
        }
    }
}
