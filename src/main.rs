use avian2d::prelude::*;
use bevy::prelude::*;

use waypoint_walker::passthrough::PlatformHooks;
use waypoint_walker::{content, core, level, movement, passthrough};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Waypoint Walker".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default().with_collision_hooks::<PlatformHooks>())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        passthrough::PassthroughPlugin,
        level::LevelPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(waypoint_walker::debug::DebugPlugin);

    app.run();
}
