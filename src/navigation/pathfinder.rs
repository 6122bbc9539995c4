//! Navigation domain: the pathfinding collaborator boundary and its defaults.

use bevy::prelude::*;

use super::{GridCell, InvalidTag, Path, Waypoint, WaypointIntent};

/// Path producer consumed by the locomotion controller.
///
/// Implementations own path search; the controller only consumes the result.
pub trait Pathfinder: Send + Sync {
    /// Waypoints from `from` to `to`. An empty path means unreachable.
    fn find_path(&self, from: Vec2, to: Vec2) -> Path;

    /// World-space center of a path cell, carrying the cell's tag.
    fn cell_center(&self, cell: GridCell) -> Result<Waypoint, InvalidTag>;

    /// Launch velocity that covers `(dx, dy)` at the given horizontal speed.
    fn solve_launch_velocity(
        &self,
        dx: f32,
        dy: f32,
        horizontal_speed: f32,
        gravity_y: f32,
    ) -> Vec2 {
        solve_launch_velocity(dx, dy, horizontal_speed, gravity_y)
    }
}

/// Ballistic launch velocity for a horizontal/vertical offset.
///
/// Horizontal speed is held constant, so flight time is `|dx| / speed` and the
/// vertical component is whatever lands the arc at `dy` after that time. With
/// no horizontal travel the apex velocity for `dy` is returned instead.
pub fn solve_launch_velocity(dx: f32, dy: f32, horizontal_speed: f32, gravity_y: f32) -> Vec2 {
    let speed = horizontal_speed.abs();
    if speed <= f32::EPSILON || dx.abs() <= f32::EPSILON {
        return Vec2::new(0.0, (2.0 * gravity_y.abs() * dy.max(0.0)).sqrt());
    }

    let flight_time = dx.abs() / speed;
    let vy = (dy - 0.5 * gravity_y * flight_time * flight_time) / flight_time;
    Vec2::new(speed * dx.signum(), vy)
}

/// Shared handle to the pathfinder used by every agent.
#[derive(Resource, Clone)]
pub struct ActivePathfinder(pub std::sync::Arc<dyn Pathfinder>);

impl ActivePathfinder {
    pub fn new(pathfinder: impl Pathfinder + 'static) -> Self {
        Self(std::sync::Arc::new(pathfinder))
    }

    pub fn get(&self) -> &dyn Pathfinder {
        self.0.as_ref()
    }
}

/// Pathfinder that serves slices of pre-authored routes.
///
/// No search happens here: a request is answered by the first route whose
/// cell nearest to `from` comes no later than its cell nearest to `to`, with
/// both ends inside `snap_radius`.
#[derive(Debug, Clone)]
pub struct RoutePathfinder {
    cell_size: f32,
    snap_radius: f32,
    routes: Vec<Vec<Waypoint>>,
}

impl RoutePathfinder {
    pub fn new(cell_size: f32, snap_radius: f32) -> Self {
        Self {
            cell_size,
            snap_radius,
            routes: Vec::new(),
        }
    }

    pub fn add_route(&mut self, cells: &[GridCell]) -> Result<(), InvalidTag> {
        let route = cells
            .iter()
            .map(|cell| self.cell_center(*cell))
            .collect::<Result<Vec<_>, _>>()?;
        if !route.is_empty() {
            self.routes.push(route);
        }
        Ok(())
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// First and last waypoint positions of every route.
    pub fn route_endpoints(&self) -> Vec<Vec2> {
        self.routes
            .iter()
            .flat_map(|route| [route.first(), route.last()])
            .flatten()
            .map(|w| w.position)
            .collect()
    }

    fn nearest(route: &[Waypoint], point: Vec2) -> Option<(usize, f32)> {
        route
            .iter()
            .enumerate()
            .map(|(i, w)| (i, w.position.distance(point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl Pathfinder for RoutePathfinder {
    fn find_path(&self, from: Vec2, to: Vec2) -> Path {
        for route in &self.routes {
            let Some((start, start_dist)) = Self::nearest(route, from) else {
                continue;
            };
            let Some((end, end_dist)) = Self::nearest(route, to) else {
                continue;
            };
            if start_dist <= self.snap_radius && end_dist <= self.snap_radius && start <= end {
                return route[start..=end].iter().copied().collect();
            }
        }
        Path::new()
    }

    fn cell_center(&self, cell: GridCell) -> Result<Waypoint, InvalidTag> {
        let intent = WaypointIntent::from_tag(cell.tag)?;
        let center = (Vec2::new(cell.x as f32, cell.y as f32) + Vec2::splat(0.5)) * self.cell_size;
        Ok(Waypoint::new(center, intent))
    }
}
