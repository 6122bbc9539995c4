//! Navigation domain: the waypoint queue consumed by a travel request.

use std::collections::VecDeque;

use super::Waypoint;

/// Ordered front-to-back queue of waypoints for one travel request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    waypoints: VecDeque<Waypoint>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn push_back(&mut self, waypoint: Waypoint) {
        self.waypoints.push_back(waypoint);
    }

    pub fn pop_front(&mut self) -> Option<Waypoint> {
        self.waypoints.pop_front()
    }

    pub fn front(&self) -> Option<&Waypoint> {
        self.waypoints.front()
    }

    pub fn back(&self) -> Option<&Waypoint> {
        self.waypoints.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    /// Drop everything but the final waypoint and return it.
    pub fn truncate_to_tail(&mut self) -> Option<Waypoint> {
        let tail = *self.waypoints.back()?;
        self.waypoints.clear();
        self.waypoints.push_back(tail);
        Some(tail)
    }
}

impl FromIterator<Waypoint> for Path {
    fn from_iter<I: IntoIterator<Item = Waypoint>>(iter: I) -> Self {
        Self {
            waypoints: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Waypoint>> for Path {
    fn from(waypoints: Vec<Waypoint>) -> Self {
        Self {
            waypoints: waypoints.into(),
        }
    }
}
