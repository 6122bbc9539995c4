//! Navigation domain: waypoints, paths, and the pathfinding boundary.

mod path;
mod pathfinder;
mod waypoint;

pub use path::Path;
pub use pathfinder::{ActivePathfinder, Pathfinder, RoutePathfinder, solve_launch_velocity};
pub use waypoint::{
    DROP_TAG, GridCell, InvalidTag, JumpTier, NO_TARGET_TAG, WALK_TAG, Waypoint, WaypointIntent,
    target_tag,
};
