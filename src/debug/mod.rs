//! Debug overlay: the agent's current target and remaining path.
//!
//! Only compiled with the `dev-tools` feature.

use bevy::prelude::*;

use crate::movement::{Agent, LocomotionController};
use crate::navigation::WaypointIntent;

const WAYPOINT_RADIUS: f32 = 0.2;
const TARGET_COLOR: Color = Color::srgb(1.0, 0.2, 0.2);
const PATH_COLOR: Color = Color::srgb(1.0, 1.0, 0.2);

fn intent_color(intent: WaypointIntent) -> Color {
    match intent {
        WaypointIntent::Walk => PATH_COLOR,
        WaypointIntent::Jump(_) => Color::srgb(0.3, 0.8, 1.0),
        WaypointIntent::Drop => Color::srgb(0.9, 0.4, 1.0),
    }
}

/// Red circle on the current target, then a line through every queued waypoint.
fn draw_navigation_gizmos(
    mut gizmos: Gizmos,
    agents: Query<(&Transform, &LocomotionController), With<Agent>>,
) {
    for (transform, controller) in &agents {
        let Some(target) = controller.current_target() else {
            continue;
        };

        gizmos.circle_2d(target.position, WAYPOINT_RADIUS, TARGET_COLOR);
        gizmos.line_2d(transform.translation.truncate(), target.position, TARGET_COLOR);

        let mut previous = target.position;
        for waypoint in controller.path().iter() {
            gizmos.line_2d(previous, waypoint.position, PATH_COLOR);
            gizmos.circle_2d(
                waypoint.position,
                WAYPOINT_RADIUS * 0.5,
                intent_color(waypoint.intent),
            );
            previous = waypoint.position;
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_navigation_gizmos);
    }
}
