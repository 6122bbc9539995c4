//! Waypoint-following locomotion for 2D platforming agents.

pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod level;
pub mod movement;
pub mod navigation;
pub mod passthrough;
