//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron and are used for deserialization.
//! Cell coordinates are integer grid cells; world space is `cell * cell_size`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::navigation::GridCell;

pub const LEVEL_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Level (level.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[reflect(Resource)]
pub struct LevelDef {
    pub schema_version: u32,
    pub cell_size: f32,
    /// How close a travel endpoint must be to a route waypoint to snap onto it.
    pub snap_radius: f32,
    pub agent_spawn: (i32, i32),
    /// Agent body size in world units.
    pub agent_size: (f32, f32),
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
    #[serde(default)]
    pub platforms: Vec<PlatformDef>,
    pub routes: Vec<RouteDef>,
    #[serde(default)]
    pub wander: Option<WanderDef>,
}

/// Solid rectangle of ground cells, corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct BlockDef {
    pub min: (i32, i32),
    pub max: (i32, i32),
}

/// One-way platform spanning columns `from..=to` whose top sits on the upper
/// edge of `row`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct PlatformDef {
    pub row: i32,
    pub from: i32,
    pub to: i32,
    #[serde(default = "default_platform_thickness")]
    pub thickness: f32,
}

fn default_platform_thickness() -> f32 {
    0.2
}

/// Pre-authored path through the level, one tagged cell per waypoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct RouteDef {
    pub name: String,
    pub cells: Vec<GridCell>,
}

/// Idle agents pick a random route endpoint to travel to.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct WanderDef {
    pub seed: u64,
    pub idle_secs: f32,
}

impl Default for LevelDef {
    /// A flat floor with a single walking route, used when level.ron is
    /// missing or broken.
    fn default() -> Self {
        Self {
            schema_version: LEVEL_SCHEMA_VERSION,
            cell_size: 1.0,
            snap_radius: 1.5,
            agent_spawn: (0, 0),
            agent_size: (0.8, 0.9),
            blocks: vec![BlockDef {
                min: (-4, -2),
                max: (12, -1),
            }],
            platforms: Vec::new(),
            routes: vec![RouteDef {
                name: "floor".to_string(),
                cells: (0..=8).map(|x| GridCell::new(x, 0, 0)).collect(),
            }],
            wander: None,
        }
    }
}

impl LevelDef {
    /// World-space center of a cell.
    pub fn cell_center(&self, (x, y): (i32, i32)) -> Vec2 {
        Vec2::new((x as f32 + 0.5) * self.cell_size, (y as f32 + 0.5) * self.cell_size)
    }
}

impl BlockDef {
    /// World-space center and full size.
    pub fn world_rect(&self, cell_size: f32) -> (Vec2, Vec2) {
        let min = Vec2::new(self.min.0 as f32, self.min.1 as f32) * cell_size;
        let max = Vec2::new(self.max.0 as f32 + 1.0, self.max.1 as f32 + 1.0) * cell_size;
        ((min + max) / 2.0, max - min)
    }
}

impl PlatformDef {
    pub fn top(&self, cell_size: f32) -> f32 {
        (self.row + 1) as f32 * cell_size
    }

    /// World-space center and full size. The slab hangs below its top.
    pub fn world_rect(&self, cell_size: f32) -> (Vec2, Vec2) {
        let left = self.from as f32 * cell_size;
        let right = (self.to + 1) as f32 * cell_size;
        let top = self.top(cell_size);
        let center = Vec2::new((left + right) / 2.0, top - self.thickness / 2.0);
        (center, Vec2::new(right - left, self.thickness))
    }
}
