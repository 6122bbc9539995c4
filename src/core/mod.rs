//! Core domain: fixed-step scheduling, gravity, and the camera.

use avian2d::prelude::*;
use bevy::camera::ScalingMode;
use bevy::prelude::*;

/// Fixed physics rate the locomotion controller ticks at.
pub const PHYSICS_HZ: f64 = 50.0;

/// World units visible vertically.
const CAMERA_VIEW_HEIGHT: f32 = 12.0;

/// Ordering of the navigation work inside each fixed step.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationSet {
    /// Collision-layer callbacks and probes.
    Sense,
    /// Controller ticks and velocity writes.
    Drive,
    /// Deferred restores.
    Timers,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
            .insert_resource(Gravity(Vec2::NEG_Y * 9.81))
            .configure_sets(
                FixedUpdate,
                (
                    NavigationSet::Sense,
                    NavigationSet::Drive,
                    NavigationSet::Timers,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: CAMERA_VIEW_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}
