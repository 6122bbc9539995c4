//! Level domain: building the level, its agent, and its pathfinder from data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LevelDef;
use crate::level::wander::{WanderState, Wanderer};
use crate::movement::{Agent, GameLayer, LocomotionController, NavigationTuning};
use crate::navigation::{ActivePathfinder, InvalidTag, RoutePathfinder};
use crate::passthrough::{OneWayPlatform, PlatformPassthrough};

const GROUND_COLOR: Color = Color::srgb(0.35, 0.4, 0.35);
const PLATFORM_COLOR: Color = Color::srgb(0.55, 0.45, 0.3);
const AGENT_COLOR: Color = Color::srgb(0.85, 0.85, 0.95);

/// Register every authored route with a fresh route pathfinder.
pub fn build_route_pathfinder(level: &LevelDef) -> Result<RoutePathfinder, InvalidTag> {
    let mut pathfinder = RoutePathfinder::new(level.cell_size, level.snap_radius);
    for route in &level.routes {
        pathfinder.add_route(&route.cells)?;
    }
    Ok(pathfinder)
}

pub(crate) fn install_pathfinder(mut commands: Commands, level: Res<LevelDef>) {
    // Routes were validated on load, so a bad tag here means the fallback
    // level is broken too.
    let pathfinder = match build_route_pathfinder(&level) {
        Ok(pathfinder) => pathfinder,
        Err(e) => {
            error!("[LEVEL] {}, agents will not find any path", e);
            RoutePathfinder::new(level.cell_size, level.snap_radius)
        }
    };

    info!("[LEVEL] Pathfinder ready with {} routes", pathfinder.route_count());

    if let Some(wander) = level.wander {
        commands.insert_resource(WanderState::new(wander, pathfinder.route_endpoints()));
    }
    commands.insert_resource(ActivePathfinder::new(pathfinder));
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    level: Res<LevelDef>,
    tuning: Res<NavigationTuning>,
) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Agent]);
    let platform_layers = CollisionLayers::new(GameLayer::Platform, [GameLayer::Agent]);

    for block in &level.blocks {
        let (center, size) = block.world_rect(level.cell_size);
        commands.spawn((
            Sprite {
                color: GROUND_COLOR,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    for platform in &level.platforms {
        let (center, size) = platform.world_rect(level.cell_size);
        commands.spawn((
            OneWayPlatform {
                top: platform.top(level.cell_size),
            },
            Sprite {
                color: PLATFORM_COLOR,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            platform_layers,
        ));
    }

    let spawn = level.cell_center(level.agent_spawn);
    let size = Vec2::new(level.agent_size.0, level.agent_size.1);

    let mut agent = commands.spawn((
        (
            Agent,
            LocomotionController::default(),
            PlatformPassthrough::new(tuning.drop_through_delay()),
        ),
        Sprite {
            color: AGENT_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(spawn.extend(1.0)),
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            SleepingDisabled,
            CollisionEventsEnabled,
            ActiveCollisionHooks::MODIFY_CONTACTS,
            CollisionLayers::new(GameLayer::Agent, GameLayer::WALKABLE),
        ),
    ));
    if let Some(wander) = level.wander {
        agent.insert(Wanderer::new(wander.idle_secs));
    }

    info!(
        "[LEVEL] Spawned {} blocks, {} platforms, agent at {}",
        level.blocks.len(),
        level.platforms.len(),
        spawn
    );
}

/// Center the camera on the level's geometry.
pub(crate) fn frame_camera(
    level: Res<LevelDef>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Some(center) = level_center(&level) else {
        return;
    };
    for mut transform in &mut cameras {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

/// Midpoint of the bounding box of all blocks and platforms.
pub fn level_center(level: &LevelDef) -> Option<Vec2> {
    let rects = level
        .blocks
        .iter()
        .map(|b| b.world_rect(level.cell_size))
        .chain(level.platforms.iter().map(|p| p.world_rect(level.cell_size)));

    let mut bounds: Option<Rect> = None;
    for (center, size) in rects {
        let rect = Rect::from_center_size(center, size);
        bounds = Some(bounds.map_or(rect, |b| b.union(rect)));
    }
    bounds.map(|b| b.center())
}
